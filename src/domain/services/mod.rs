// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 候选职位元素发现
pub mod discovery;
/// 职位字段提取
pub mod extraction;
/// 资格校验与经验分类
pub mod validation;
