// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 相对日期解析工具
pub mod date_parser;
/// 关键词与正则模式表
pub mod keywords;
/// 日志与遥测初始化
pub mod telemetry;
