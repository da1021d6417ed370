// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位仓库接口
pub mod job_repository;
/// 通知器接口
pub mod notifier;
