use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use catalog_media::VideoCatalogService;
use catalog_media::domain::{ProductId, ProductVideoQuery, Video, VideoId, VideoRepository};
use catalog_ports::{CachePolicy, Repository};
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub VideoRepo {}

    #[async_trait]
    impl Repository<Video> for VideoRepo {
        async fn get_by_id(&self, id: VideoId, cache: CachePolicy) -> AppResult<Option<Video>>;
        async fn insert(&self, entity: Video) -> AppResult<Video>;
        async fn update(&self, entity: &Video) -> AppResult<()>;
        async fn delete(&self, entity: &Video) -> AppResult<()>;
    }

    #[async_trait]
    impl VideoRepository for VideoRepo {
        async fn find_by_product(&self, query: &ProductVideoQuery) -> AppResult<Vec<Video>>;
    }
}

fn service(repo: MockVideoRepo) -> VideoCatalogService {
    VideoCatalogService::new(Arc::new(repo))
}

fn video(id: i32) -> Video {
    Video {
        id: VideoId(id),
        video_url: format!("https://cdn/{}.mp4", id),
    }
}

#[tokio::test]
async fn test_get_video_by_id_bypasses_cache() {
    let mut repo = MockVideoRepo::new();
    repo.expect_get_by_id()
        .with(eq(VideoId(5)), eq(CachePolicy::Bypass))
        .times(1)
        .returning(|id, _| Ok(Some(video(id.0))));

    let found = service(repo).get_video_by_id(VideoId(5)).await.unwrap();
    assert_eq!(found, Some(video(5)));
}

#[tokio::test]
async fn test_unset_product_issues_no_query() {
    let mut repo = MockVideoRepo::new();
    repo.expect_find_by_product().times(0);

    let videos = service(repo)
        .get_videos_by_product(ProductId::UNSET, 3)
        .await
        .unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_records_to_return_becomes_query_limit() {
    let mut repo = MockVideoRepo::new();
    repo.expect_find_by_product()
        .withf(|q| q.product_id() == ProductId(9) && q.limit() == Some(2))
        .times(1)
        .returning(|_| Ok(vec![video(12), video(11)]));
    repo.expect_find_by_product()
        .withf(|q| q.product_id() == ProductId(9) && q.limit().is_none())
        .times(2)
        .returning(|_| Ok(vec![video(12), video(11), video(10)]));

    let service = service(repo);
    assert_eq!(service.get_videos_by_product(ProductId(9), 2).await.unwrap().len(), 2);
    assert_eq!(service.get_videos_by_product(ProductId(9), 0).await.unwrap().len(), 3);
    assert_eq!(service.get_videos_by_product(ProductId(9), -5).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_none_makes_no_repository_call() {
    let mut repo = MockVideoRepo::new();
    repo.expect_delete().times(0);
    repo.expect_get_by_id().times(0);

    let err = service(repo).delete_video(None).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_delete_delegates_to_repository() {
    let mut repo = MockVideoRepo::new();
    repo.expect_delete()
        .withf(|v| v.id == VideoId(3))
        .times(1)
        .returning(|_| Ok(()));

    service(repo).delete_video(Some(&video(3))).await.unwrap();
}

#[tokio::test]
async fn test_insert_returns_video_with_assigned_identity() {
    let mut repo = MockVideoRepo::new();
    repo.expect_insert().times(1).returning(|mut v| {
        v.id = VideoId(77);
        Ok(v)
    });

    let inserted = service(repo)
        .insert_video(Video::new("https://cdn/new.mp4"))
        .await
        .unwrap();
    assert_eq!(inserted.id, VideoId(77));
    assert_eq!(inserted.video_url, "https://cdn/new.mp4");
}

#[tokio::test]
async fn test_storage_errors_propagate_unchanged() {
    let mut repo = MockVideoRepo::new();
    repo.expect_insert()
        .times(1)
        .returning(|_| Err(AppError::conflict("duplicate video")));
    repo.expect_update()
        .times(1)
        .returning(|_| Err(AppError::database("connection reset")));
    repo.expect_find_by_product()
        .times(1)
        .returning(|_| Err(AppError::database("timeout")));

    let service = service(repo);

    match service.insert_video(Video::new("https://cdn/x.mp4")).await {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, "duplicate video"),
        other => panic!("unexpected result: {:?}", other),
    }
    match service.update_video(&video(1)).await {
        Err(AppError::Database(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("unexpected result: {:?}", other),
    }
    match service.get_videos_by_product(ProductId(1), 0).await {
        Err(AppError::Database(msg)) => assert_eq!(msg, "timeout"),
        other => panic!("unexpected result: {:?}", other),
    }
}
