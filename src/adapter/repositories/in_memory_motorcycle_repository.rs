//! In-Memory Motorcycle Repository Implementation
//!
//! MotorcycleRepositoryのインメモリ実装（プロセス終了とともにデータは消える）

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::constants::{MotorcycleId, INVALID_ENTITY_ID};
use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;
use crate::domain::repositories::motorcycle_repository::MotorcycleRepository;

/// リポジトリの内部状態
///
/// IDカウンタはマップと同じロックで保護する
#[derive(Debug, Default)]
struct RepositoryState {
    /// 主キー → レコード
    motorcycles: BTreeMap<MotorcycleId, Motorcycle>,
    /// 最後に割り当てたID（削除されても再利用しない）
    last_id: MotorcycleId,
}

impl RepositoryState {
    fn next_id(&mut self) -> Result<MotorcycleId, DomainError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Storage {
                message: "primary key space exhausted".to_string(),
            })?;
        self.last_id = id;
        Ok(id)
    }
}

/// インメモリのバイクリポジトリ
#[derive(Debug, Default)]
pub struct InMemoryMotorcycleRepository {
    state: RwLock<RepositoryState>,
}

impl InMemoryMotorcycleRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MotorcycleRepository for InMemoryMotorcycleRepository {
    async fn list(&self) -> Result<Vec<Motorcycle>, DomainError> {
        let state = self.state.read().await;
        Ok(state.motorcycles.values().cloned().collect())
    }

    async fn insert(&self, mut motorcycle: Motorcycle) -> Result<Motorcycle, DomainError> {
        let mut state = self.state.write().await;

        if motorcycle.id() != INVALID_ENTITY_ID && state.motorcycles.contains_key(&motorcycle.id())
        {
            return Err(DomainError::DuplicateId {
                id: motorcycle.id(),
            });
        }

        motorcycle.validate()?;

        let id = state.next_id()?;
        motorcycle.assign_id(id, Utc::now());
        state.motorcycles.insert(id, motorcycle.clone());

        info!(
            "Stored motorcycle {}: {} {} {}",
            id, motorcycle.year, motorcycle.make, motorcycle.model
        );

        Ok(motorcycle)
    }

    async fn update(&self, mut motorcycle: Motorcycle) -> Result<Motorcycle, DomainError> {
        let mut state = self.state.write().await;

        let id = motorcycle.id();
        let created_utc = state
            .motorcycles
            .get(&id)
            .map(Motorcycle::created_utc)
            .ok_or(DomainError::NotFound { id })?;

        motorcycle.validate()?;

        motorcycle.mark_modified(created_utc, Utc::now());
        state.motorcycles.insert(id, motorcycle.clone());

        debug!("Updated motorcycle {}", id);

        Ok(motorcycle)
    }

    async fn delete(&self, motorcycle: &Motorcycle) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        let id = motorcycle.id();
        state
            .motorcycles
            .remove(&id)
            .ok_or(DomainError::NotFound { id })?;

        debug!("Deleted motorcycle {}", id);

        Ok(())
    }

    async fn find(&self, motorcycle: &Motorcycle) -> Result<Motorcycle, DomainError> {
        self.find_by_id(motorcycle.id()).await
    }

    async fn find_by_id(&self, id: MotorcycleId) -> Result<Motorcycle, DomainError> {
        let state = self.state.read().await;
        state
            .motorcycles
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound { id })
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Motorcycle>, DomainError> {
        let vin = vin.trim();
        let state = self.state.read().await;
        Ok(state
            .motorcycles
            .values()
            .find(|m| m.vin.eq_ignore_ascii_case(vin))
            .cloned())
    }

    async fn save(&self) -> Result<(), DomainError> {
        // 変更は即時に反映されるため、確定すべきものはない
        debug!("Save requested; in-memory repository has nothing to commit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_motorcycle(vin: &str) -> Motorcycle {
        Motorcycle::new("Honda", "Shadow", 2006, vin).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryMotorcycleRepository::new();

        let motorcycles = repo.list().await.unwrap();

        assert!(motorcycles.is_empty());
    }

    #[tokio::test]
    async fn test_list_of_one() {
        let repo = InMemoryMotorcycleRepository::new();
        repo.insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_timestamp() {
        let repo = InMemoryMotorcycleRepository::new();
        let before = Utc::now();

        let stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        assert_eq!(stored.id(), 1);
        assert!(stored.created_utc() >= before);
        assert!(stored.modified_utc().is_none());
        assert_eq!(repo.list().await.unwrap()[0], stored);
    }

    #[tokio::test]
    async fn test_insert_assigns_unused_ids() {
        let repo = InMemoryMotorcycleRepository::new();

        let first = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        let second = repo
            .insert(create_test_motorcycle("JH2RC5006LM200001"))
            .await
            .unwrap();

        assert!(second.id() > first.id());
    }

    #[tokio::test]
    async fn test_insert_id_already_exists() {
        let repo = InMemoryMotorcycleRepository::new();
        let stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        let result = repo.insert(stored.clone()).await;

        assert_eq!(result.unwrap_err(), DomainError::DuplicateId { id: stored.id() });
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_entity() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut motorcycle = create_test_motorcycle("1HD1BW5177Y045632");
        motorcycle.model = String::new();

        let result = repo.insert(motorcycle).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryMotorcycleRepository::new();
        let stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        let found = repo.find_by_id(stored.id()).await.unwrap();

        assert_eq!(found.id(), stored.id());
    }

    #[tokio::test]
    async fn test_find_by_id_not_exist() {
        let repo = InMemoryMotorcycleRepository::new();

        let result = repo.find_by_id(123).await;

        assert_eq!(result.unwrap_err(), DomainError::NotFound { id: 123 });
    }

    #[tokio::test]
    async fn test_find_uses_entity_id() {
        let repo = InMemoryMotorcycleRepository::new();
        let stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        let found = repo.find(&stored).await.unwrap();
        assert_eq!(found, stored);

        let unsaved = create_test_motorcycle("JH2RC5006LM200001");
        assert!(repo.find(&unsaved).await.is_err());
    }

    #[tokio::test]
    async fn test_find_by_vin_ignores_case() {
        let repo = InMemoryMotorcycleRepository::new();
        repo.insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        let found = repo.find_by_vin("1hd1bw5177y045632").await.unwrap();
        let missing = repo.find_by_vin("JH2RC5006LM200001").await.unwrap();

        assert!(found.is_some());
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        stored.make = "Harley Davidson".to_string();

        let updated = repo.update(stored.clone()).await.unwrap();

        assert!(updated.modified_utc().is_some());
        assert_eq!(updated.created_utc(), stored.created_utc());

        let found = repo.find_by_id(stored.id()).await.unwrap();
        assert_eq!(found.make, "Harley Davidson");
        assert_eq!(found.modified_utc(), updated.modified_utc());
    }

    #[tokio::test]
    async fn test_update_not_exist() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut motorcycle = create_test_motorcycle("1HD1BW5177Y045632");
        motorcycle.assign_id(123, Utc::now());

        let result = repo.update(motorcycle).await;

        assert_eq!(result.unwrap_err(), DomainError::NotFound { id: 123 });
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_change() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        stored.year = 1800;

        assert!(repo.update(stored.clone()).await.is_err());
        assert_eq!(repo.find_by_id(stored.id()).await.unwrap().year, 2006);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryMotorcycleRepository::new();
        let stored = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        repo.delete(&stored).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryMotorcycleRepository::new();
        let first = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        let second = repo
            .insert(create_test_motorcycle("JH2RC5006LM200001"))
            .await
            .unwrap();

        repo.delete(&first).await.unwrap();

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), second.id());
    }

    #[tokio::test]
    async fn test_delete_not_exist() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut motorcycle = create_test_motorcycle("1HD1BW5177Y045632");
        motorcycle.assign_id(123, Utc::now());

        let result = repo.delete(&motorcycle).await;

        assert_eq!(result.unwrap_err(), DomainError::NotFound { id: 123 });
    }

    #[tokio::test]
    async fn test_lookup_after_delete_and_reinsert() {
        let repo = InMemoryMotorcycleRepository::new();
        let first = repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        let second = repo
            .insert(create_test_motorcycle("JH2RC5006LM200001"))
            .await
            .unwrap();
        let third = repo
            .insert(create_test_motorcycle("JS1GN7FA5C2100345"))
            .await
            .unwrap();

        repo.delete(&second).await.unwrap();
        let reinserted = repo
            .insert(create_test_motorcycle("JH2RC5006LM200001"))
            .await
            .unwrap();

        // 削除されたIDは再利用されない
        assert_eq!(reinserted.id(), 4);
        for expected in [&first, &third, &reinserted] {
            let found = repo.find_by_id(expected.id()).await.unwrap();
            assert_eq!(found.vin, expected.vin);
        }
        assert!(repo.find_by_id(second.id()).await.is_err());
    }

    #[tokio::test]
    async fn test_ids_are_per_repository() {
        let first_repo = InMemoryMotorcycleRepository::new();
        let second_repo = InMemoryMotorcycleRepository::new();

        let a = first_repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();
        let b = second_repo
            .insert(create_test_motorcycle("1HD1BW5177Y045632"))
            .await
            .unwrap();

        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 1);
    }

    #[tokio::test]
    async fn test_save() {
        let repo = InMemoryMotorcycleRepository::new();
        assert!(repo.save().await.is_ok());
    }
}
