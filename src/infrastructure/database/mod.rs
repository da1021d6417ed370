// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库连接与建表
pub mod connection;
/// 数据库实体
pub mod entities;
