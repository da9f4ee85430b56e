//! # Motorcycle Entity
//!
//! バイクのドメインエンティティ

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::constants::{
    MotorcycleId, INVALID_ENTITY_ID, MAX_MAKE_LENGTH, MAX_MODEL_LENGTH, MIN_MOTORCYCLE_YEAR,
    VIN_LENGTH,
};
use crate::domain::errors::DomainError;

/// バイクのドメインエンティティ
///
/// `id` と監査用タイムスタンプはRepositoryのみが設定する。
/// メーカー・モデル・年式・VINは更新のために公開している。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motorcycle {
    id: MotorcycleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    created_utc: DateTime<Utc>,
    modified_utc: Option<DateTime<Utc>>,
}

impl Motorcycle {
    /// 新しい（未登録の）バイクを作成
    ///
    /// # Arguments
    ///
    /// * `make` - メーカー名
    /// * `model` - モデル名
    /// * `year` - 年式
    /// * `vin` - 車台番号（大文字に正規化される）
    ///
    /// # Errors
    ///
    /// いずれかの属性が検証ルールを満たさない場合にエラーを返す
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let motorcycle = Self {
            id: INVALID_ENTITY_ID,
            make: make.into().trim().to_string(),
            model: model.into().trim().to_string(),
            year,
            vin: vin.into().trim().to_ascii_uppercase(),
            created_utc: Utc::now(),
            modified_utc: None,
        };

        motorcycle.validate()?;

        Ok(motorcycle)
    }

    pub fn id(&self) -> MotorcycleId {
        self.id
    }

    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    pub fn modified_utc(&self) -> Option<DateTime<Utc>> {
        self.modified_utc
    }

    /// Repositoryに登録済みかどうか
    pub fn is_persisted(&self) -> bool {
        self.id != INVALID_ENTITY_ID
    }

    /// 属性が検証ルールを満たしているか確認
    ///
    /// # Errors
    ///
    /// 最初に見つかった違反を `DomainError::Validation` として返す
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text("make", &self.make, MAX_MAKE_LENGTH)?;
        validate_text("model", &self.model, MAX_MODEL_LENGTH)?;

        let max_year = Utc::now().year() + 1;
        if self.year < MIN_MOTORCYCLE_YEAR || self.year > max_year {
            return Err(DomainError::validation(
                "year",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_MOTORCYCLE_YEAR, max_year, self.year
                ),
            ));
        }

        validate_vin(&self.vin)
    }

    /// Repositoryによる登録時の主キー割り当て
    pub(crate) fn assign_id(&mut self, id: MotorcycleId, created_utc: DateTime<Utc>) {
        self.id = id;
        self.created_utc = created_utc;
        self.modified_utc = None;
    }

    /// Repositoryによる更新時のタイムスタンプ設定
    pub(crate) fn mark_modified(&mut self, created_utc: DateTime<Utc>, modified_utc: DateTime<Utc>) {
        self.created_utc = created_utc;
        self.modified_utc = Some(modified_utc);
    }
}

fn validate_text(field: &str, value: &str, max_length: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    if value.chars().count() > max_length {
        return Err(DomainError::validation(
            field,
            format!("must be at most {} characters", max_length),
        ));
    }
    Ok(())
}

/// VINの形式チェック（チェックディジットは検証しない）
fn validate_vin(vin: &str) -> Result<(), DomainError> {
    if vin.is_empty() {
        return Err(DomainError::validation("vin", "is required"));
    }
    if vin.chars().count() != VIN_LENGTH {
        return Err(DomainError::validation(
            "vin",
            format!("must be exactly {} characters", VIN_LENGTH),
        ));
    }
    if let Some(c) = vin
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() || matches!(c, 'I' | 'O' | 'Q' | 'i' | 'o' | 'q'))
    {
        return Err(DomainError::validation(
            "vin",
            format!("contains an invalid character '{}'", c),
        ));
    }
    Ok(())
}
