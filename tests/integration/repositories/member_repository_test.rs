// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 成员仓库集成测试

use crate::integration::helpers::{insert_member, insert_team, seed_roster, setup_db};
use rosterrs::domain::models::member::Member;
use rosterrs::domain::repositories::member_repository::{MemberRepository, MemberSearchCondition};
use rosterrs::domain::repositories::RepositoryError;
use rosterrs::domain::repositories::team_repository::TeamRepository;
use rosterrs::infrastructure::repositories::member_repo_impl::MemberRepositoryImpl;
use rosterrs::infrastructure::repositories::team_repo_impl::TeamRepositoryImpl;
use std::sync::Arc;
use uuid::Uuid;

async fn build_repo() -> (MemberRepositoryImpl, sea_orm::DatabaseConnection) {
    let db = setup_db().await;
    (MemberRepositoryImpl::new(Arc::new(db.clone())), db)
}

#[tokio::test]
async fn create_and_find_by_id() {
    let (repo, _db) = build_repo().await;

    let member = Member::new(Some("member1".to_string()), 10);
    let created = repo.create(&member).await.unwrap();
    assert_eq!(created, member);

    let found = repo.find_by_id(member.id).await.unwrap().unwrap();
    assert_eq!(found.username.as_deref(), Some("member1"));
    assert_eq!(found.age, 10);
    assert_eq!(found.team_id, None);
}

#[tokio::test]
async fn find_by_username_and_find_all() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let found = repo.find_by_username("member2").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].age, 20);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 4);

    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn update_changes_fields() {
    let (repo, _db) = build_repo().await;

    let mut member = Member::new(Some("before".to_string()), 10);
    repo.create(&member).await.unwrap();

    member.username = Some("after".to_string());
    member.age = 11;
    let updated = repo.update(&member).await.unwrap();
    assert_eq!(updated.username.as_deref(), Some("after"));
    assert_eq!(updated.age, 11);

    let found = repo.find_by_id(member.id).await.unwrap().unwrap();
    assert_eq!(found.username.as_deref(), Some("after"));
}

#[tokio::test]
async fn update_unknown_member_is_not_found() {
    let (repo, _db) = build_repo().await;

    let ghost = Member::new(Some("ghost".to_string()), 99);
    let err = repo.update(&ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn delete_removes_member() {
    let (repo, _db) = build_repo().await;

    let member = Member::new(Some("temp".to_string()), 30);
    repo.create(&member).await.unwrap();

    repo.delete(member.id).await.unwrap();
    assert!(repo.find_by_id(member.id).await.unwrap().is_none());

    let err = repo.delete(member.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn assign_team_moves_member_between_teams() {
    let (repo, db) = build_repo().await;
    let team_a = insert_team(&db, "teamA").await;
    let team_b = insert_team(&db, "teamB").await;
    let member_id = insert_member(&db, Some("member1"), 10, Some(team_a)).await;

    repo.assign_team(member_id, Some(team_b)).await.unwrap();
    let found = repo.find_by_id(member_id).await.unwrap().unwrap();
    assert_eq!(found.team_id, Some(team_b));

    // None detaches the member from any team
    repo.assign_team(member_id, None).await.unwrap();
    let found = repo.find_by_id(member_id).await.unwrap().unwrap();
    assert_eq!(found.team_id, None);
}

/// 变更团队后，成员侧外键与团队侧成员集合同时反映新归属
#[tokio::test]
async fn assign_team_is_visible_from_both_sides() {
    let (repo, db) = build_repo().await;
    let teams = TeamRepositoryImpl::new(Arc::new(db.clone()));
    let team_a = insert_team(&db, "teamA").await;
    let team_b = insert_team(&db, "teamB").await;
    let member_id = insert_member(&db, Some("member1"), 10, Some(team_a)).await;

    repo.assign_team(member_id, Some(team_b)).await.unwrap();

    let found = repo.find_by_id(member_id).await.unwrap().unwrap();
    assert_eq!(found.team_id, Some(team_b));

    let old_side = teams.find_members(team_a).await.unwrap();
    assert!(old_side.is_empty());
    let new_side = teams.find_members(team_b).await.unwrap();
    assert_eq!(new_side.len(), 1);
    assert_eq!(new_side[0].id, member_id);
}

#[tokio::test]
async fn assign_team_unknown_member_is_not_found() {
    let (repo, db) = build_repo().await;
    let team_a = insert_team(&db, "teamA").await;

    let err = repo.assign_team(Uuid::new_v4(), Some(team_a)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn search_without_condition_returns_everyone() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let rows = repo.search(&MemberSearchCondition::default()).await.unwrap();
    assert_eq!(rows.len(), 4);
}

#[tokio::test]
async fn search_by_username_only() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let condition = MemberSearchCondition {
        username: Some("member3".to_string()),
        ..Default::default()
    };
    let rows = repo.search(&condition).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username.as_deref(), Some("member3"));
    assert_eq!(rows[0].team_name.as_deref(), Some("teamB"));
}

#[tokio::test]
async fn search_by_age_range() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let condition = MemberSearchCondition {
        age_goe: Some(20),
        age_loe: Some(30),
        ..Default::default()
    };
    let mut rows = repo.search(&condition).await.unwrap();
    rows.sort_by_key(|r| r.age);

    let ages: Vec<_> = rows.iter().map(|r| r.age).collect();
    assert_eq!(ages, vec![20, 30]);
}

#[tokio::test]
async fn search_by_team_and_age() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let condition = MemberSearchCondition {
        team_name: Some("teamB".to_string()),
        age_goe: Some(35),
        ..Default::default()
    };
    let rows = repo.search(&condition).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username.as_deref(), Some("member4"));
    assert_eq!(rows[0].age, 40);
}

#[tokio::test]
async fn search_with_no_match_is_empty() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let condition = MemberSearchCondition {
        username: Some("nobody".to_string()),
        ..Default::default()
    };
    let rows = repo.search(&condition).await.unwrap();
    assert!(rows.is_empty());
}

/// 未归属团队的成员在扁平化投影中团队列为空
#[tokio::test]
async fn search_keeps_members_without_team() {
    let (repo, db) = build_repo().await;
    insert_member(&db, Some("loner"), 25, None).await;

    let rows = repo.search(&MemberSearchCondition::default()).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username.as_deref(), Some("loner"));
    assert_eq!(rows[0].team_id, None);
    assert_eq!(rows[0].team_name, None);
}

#[tokio::test]
async fn search_page_reports_total() {
    let (repo, db) = build_repo().await;
    seed_roster(&db).await;

    let condition = MemberSearchCondition::default();
    let (rows, total) = repo.search_page(&condition, 0, 3).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(total, 4);

    let (rows, total) = repo.search_page(&condition, 1, 3).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(total, 4);
}
