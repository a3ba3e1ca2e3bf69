// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 连接查询测试
//!
//! 覆盖内连接、带附加ON条件的左连接以及无外键的临时连接

use crate::integration::helpers::{insert_member, seed_roster, setup_db};
use rosterrs::infrastructure::database::entities::{member as member_entity, team as team_entity};
use sea_orm::sea_query::{Expr, IntoCondition};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

#[tokio::test]
async fn inner_join_filters_by_team_name() {
    let db = setup_db().await;
    seed_roster(&db).await;

    let rows = member_entity::Entity::find()
        .join(JoinType::InnerJoin, member_entity::Relation::Team.def())
        .filter(team_entity::Column::Name.eq("teamA"))
        .order_by_asc(member_entity::Column::Username)
        .all(&db)
        .await
        .unwrap();

    let names: Vec<_> = rows.iter().filter_map(|m| m.username.as_deref()).collect();
    assert_eq!(names, vec!["member1", "member2"]);
}

/// 左连接并将ON条件限定在teamA：所有成员都保留，其余团队列为空
#[tokio::test]
async fn left_join_with_on_condition_keeps_all_members() {
    let db = setup_db().await;
    seed_roster(&db).await;

    let rows = member_entity::Entity::find()
        .select_also(team_entity::Entity)
        .join(
            JoinType::LeftJoin,
            member_entity::Relation::Team
                .def()
                .on_condition(|_left, right| {
                    Expr::col((right, team_entity::Column::Name))
                        .eq("teamA")
                        .into_condition()
                }),
        )
        .order_by_asc(member_entity::Column::Username)
        .all(&db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0].1.as_ref().map(|t| t.name.as_str()),
        Some("teamA")
    );
    assert_eq!(
        rows[1].1.as_ref().map(|t| t.name.as_str()),
        Some("teamA")
    );
    assert!(rows[2].1.is_none());
    assert!(rows[3].1.is_none());
}

/// 无外键的临时连接：按用户名与团队名相等进行匹配
#[tokio::test]
async fn ad_hoc_join_matches_username_to_team_name() {
    let db = setup_db().await;
    seed_roster(&db).await;
    insert_member(&db, Some("teamA"), 50, None).await;
    insert_member(&db, Some("teamB"), 60, None).await;

    let rows = member_entity::Entity::find()
        .select_also(team_entity::Entity)
        .join(
            JoinType::InnerJoin,
            member_entity::Entity::belongs_to(team_entity::Entity)
                .from(member_entity::Column::Username)
                .to(team_entity::Column::Name)
                .into(),
        )
        .order_by_asc(member_entity::Column::Username)
        .all(&db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.username.as_deref(), Some("teamA"));
    assert_eq!(rows[0].1.as_ref().map(|t| t.name.as_str()), Some("teamA"));
    assert_eq!(rows[1].0.username.as_deref(), Some("teamB"));
    assert_eq!(rows[1].1.as_ref().map(|t| t.name.as_str()), Some("teamB"));
}
