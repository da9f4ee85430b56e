//! # Motorcycle Repository Trait
//!
//! バイクの永続化（CRUD）を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::constants::MotorcycleId;
use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;

/// バイクリポジトリ
///
/// 存在しないIDや重複IDは全て `DomainError` として返し、パニックしない
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MotorcycleRepository: Send + Sync {
    /// 登録済みのバイクを全て返す（順序は保証しない）
    async fn list(&self) -> Result<Vec<Motorcycle>, DomainError>;

    /// バイクを登録する
    ///
    /// 次のIDと作成日時を割り当て、保存したエンティティを返す
    ///
    /// # Errors
    ///
    /// エンティティのIDが既に存在する場合、または検証に失敗した場合にエラーを返す
    async fn insert(&self, motorcycle: Motorcycle) -> Result<Motorcycle, DomainError>;

    /// 登録済みのバイクを置き換える
    ///
    /// 更新日時を設定し、保存したエンティティを返す
    ///
    /// # Errors
    ///
    /// IDが存在しない場合、または検証に失敗した場合にエラーを返す
    async fn update(&self, motorcycle: Motorcycle) -> Result<Motorcycle, DomainError>;

    /// 登録済みのバイクを削除する
    ///
    /// # Errors
    ///
    /// IDが存在しない場合にエラーを返す
    async fn delete(&self, motorcycle: &Motorcycle) -> Result<(), DomainError>;

    /// エンティティに対応する登録済みのバイクを探す
    async fn find(&self, motorcycle: &Motorcycle) -> Result<Motorcycle, DomainError>;

    /// 主キーでバイクを探す
    ///
    /// # Errors
    ///
    /// IDが存在しない場合に `DomainError::NotFound` を返す
    async fn find_by_id(&self, id: MotorcycleId) -> Result<Motorcycle, DomainError>;

    /// VINでバイクを探す（大文字・小文字は区別しない）
    async fn find_by_vin(&self, vin: &str) -> Result<Option<Motorcycle>, DomainError>;

    /// 変更を確定する（Unit of Work のコミット）
    async fn save(&self) -> Result<(), DomainError>;
}
