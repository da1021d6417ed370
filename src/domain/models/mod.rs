// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位记录与经验等级
pub mod job;
/// 来源与抓取策略
pub mod source;
/// 单来源抓取报告
pub mod source_report;
