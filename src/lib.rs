// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现轻量与渲染两种抓取引擎及其路由
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如数据库和通知投递
pub mod infrastructure;

/// 工具模块
///
/// 提供关键词表、日期解析和日志等通用辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现来源抓取工作器和周期编排
pub mod workers;
