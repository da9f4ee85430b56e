//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Motorcycle**: 登録されたバイクのビジネス表現
//! - **AuthorizationRole**: 利用者の認可ロール

pub mod authorization_role;
pub mod motorcycle;
