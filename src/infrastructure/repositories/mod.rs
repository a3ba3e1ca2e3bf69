// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供基于SeaORM的领域仓库接口实现
pub mod member_repo_impl;
pub mod team_repo_impl;
