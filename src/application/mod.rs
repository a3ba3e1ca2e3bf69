// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 包含面向读取的投影结构（DTO），与持久化实体相互独立
pub mod dto;
