//! Общие типы и чистая логика витрины Natura Deco.
//!
//! Крейт не зависит от браузера: всё, что здесь есть, собирается и
//! тестируется нативно, а `frontend` только отображает результат.

pub mod domain;
pub mod shared;
pub mod usecases;
