//! Tipos da API do Trello
//!
//! Estruturas type-safe espelhando o JSON (camelCase) da API:
//!
//! - **Board / List / Label**: estrutura dos boards
//! - **Card**: cards, incluindo `customFieldItems`
//! - **Checklist / CheckItem**: checklists de cards
//! - **Member / Attachment**: pessoas e anexos
//! - **Action**: histórico (usado para rastrear cópias)
//! - **CustomField / CustomFieldValue**: campos personalizados
//!
//! ## ⚠️ Notas Importantes
//!
//! - **Custom field values**: `number` e `checked` trafegam como STRING
//! - **Datas de custom field**: `YYYY-MM-DDTHH:MM:SSZ`, sempre UTC

pub mod action;
pub mod board;
pub mod card;
pub mod checklist;
pub mod custom_field;
pub mod field_value;
pub mod member;

pub use action::{Action, ActionData, ActionRef};
pub use board::{Board, Label, List};
pub use card::Card;
pub use checklist::{CheckItem, CheckItemState, Checklist};
pub use custom_field::{CustomField, CustomFieldDisplay, CustomFieldItem, CustomFieldOption};
pub use field_value::{CustomFieldValue, EncodedValue, ResolveValue, WireValue};
pub use member::{Attachment, Member};
