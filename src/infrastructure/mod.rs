// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库基础设施
pub mod database;
/// 通知投递
pub mod notify;
/// 仓储实现
pub mod repositories;
