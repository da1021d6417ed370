// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub company: String,
    #[sea_orm(unique)]
    pub url: String,
    pub description: String,
    pub experience_level: String,
    pub location: String,
    pub posted_date_text: String,
    pub posted_date: Option<ChronoDateTimeUtc>,
    pub salary: String,
    pub employment_type: String,
    pub raw_text: String,
    pub notified: bool,
    pub first_seen_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
