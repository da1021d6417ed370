// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::job::{ExperienceLevel, JobRecord, PersistedJob};
use crate::domain::repositories::job_repository::JobRepository;
use crate::infrastructure::database::entities::job as job_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;
use std::sync::Arc;

/// 职位仓库实现
///
/// URL唯一约束在存储端落实去重：冲突行被静默跳过，
/// 插入计数只反映真正新增的行。
pub struct SeaOrmJobRepository {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SeaOrmJobRepository {
    /// 创建新的职位仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

// Column width clamps, matching the table definition.
fn clamp(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn to_active_model(record: &JobRecord) -> job_entity::ActiveModel {
    job_entity::ActiveModel {
        id: NotSet,
        title: Set(clamp(&record.title, 500)),
        company: Set(clamp(&record.company, 200)),
        url: Set(clamp(&record.url, 1000)),
        description: Set(record.description.clone()),
        experience_level: Set(clamp(&record.experience_level.to_string(), 100)),
        location: Set(clamp(&record.location, 200)),
        posted_date_text: Set(clamp(&record.posted_date_text, 100)),
        posted_date: Set(record.posted_date),
        salary: Set(clamp(&record.salary, 200)),
        employment_type: Set(clamp(&record.employment_type, 100)),
        raw_text: Set(record.raw_text.clone()),
        notified: Set(false),
        first_seen_at: Set(Utc::now()),
    }
}

fn to_persisted(model: job_entity::Model) -> PersistedJob {
    PersistedJob {
        record: JobRecord {
            title: model.title,
            company: model.company,
            url: model.url,
            description: model.description,
            experience_level: ExperienceLevel::from_label(&model.experience_level),
            location: model.location,
            posted_date_text: model.posted_date_text,
            posted_date: model.posted_date,
            salary: model.salary,
            employment_type: model.employment_type,
            raw_text: model.raw_text,
        },
        first_seen_at: model.first_seen_at,
        notified: model.notified,
    }
}

#[async_trait]
impl JobRepository for SeaOrmJobRepository {
    async fn bulk_insert(&self, records: &[JobRecord]) -> anyhow::Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let models = records.iter().map(to_active_model);

        let inserted = job_entity::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(job_entity::Column::Url)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn find_unnotified(&self, limit: u64) -> anyhow::Result<Vec<PersistedJob>> {
        let models = job_entity::Entity::find()
            .filter(job_entity::Column::Notified.eq(false))
            .order_by_desc(job_entity::Column::FirstSeenAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_persisted).collect())
    }

    async fn mark_notified(&self, urls: &[String]) -> anyhow::Result<()> {
        if urls.is_empty() {
            return Ok(());
        }

        job_entity::Entity::update_many()
            .col_expr(job_entity::Column::Notified, Expr::value(true))
            .filter(job_entity::Column::Url.is_in(urls.iter().cloned()))
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }
}
