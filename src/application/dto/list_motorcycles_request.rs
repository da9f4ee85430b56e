//! # List Motorcycles Request DTO
//!
//! バイク一覧リクエストのData Transfer Object

/// バイク一覧リクエスト
///
/// 現時点では条件を持たないため、常に有効
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMotorcyclesRequest;

impl ListMotorcyclesRequest {
    pub fn new() -> Self {
        Self
    }
}
