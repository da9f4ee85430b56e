//! # Insert Motorcycle Request DTO
//!
//! バイク登録リクエストのData Transfer Object

use crate::domain::constants::MIN_MOTORCYCLE_YEAR;
use crate::domain::errors::DomainError;

/// バイク登録リクエスト
///
/// 必須項目と年式の下限のみを検証する。
/// 文字数やVIN形式などの詳細なルールはエンティティ生成時に検証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertMotorcycleRequest {
    make: String,
    model: String,
    year: i32,
    vin: String,
}

impl InsertMotorcycleRequest {
    /// 新しい登録リクエストを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use motominder::application::dto::insert_motorcycle_request::InsertMotorcycleRequest;
    ///
    /// let request = InsertMotorcycleRequest::new("Honda", "Shadow", 2006, "1HD1BW5177Y045632").unwrap();
    /// assert_eq!(request.make(), "Honda");
    ///
    /// // メーカー名が空の場合は作成できない
    /// assert!(InsertMotorcycleRequest::new("", "Shadow", 2006, "1HD1BW5177Y045632").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// 必須項目が空の場合、または年式が下限未満の場合にエラーを返す
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let request = Self {
            make: make.into(),
            model: model.into(),
            year,
            vin: vin.into(),
        };

        request.validate()?;

        Ok(request)
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [("make", &self.make), ("model", &self.model), ("vin", &self.vin)] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(field, "is required"));
            }
        }

        if self.year < MIN_MOTORCYCLE_YEAR {
            return Err(DomainError::validation(
                "year",
                format!("must be at least {}", MIN_MOTORCYCLE_YEAR),
            ));
        }

        Ok(())
    }
}
