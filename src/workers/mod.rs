// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 周期编排器
pub mod orchestrator;
/// 来源抓取工作器
pub mod source_worker;
