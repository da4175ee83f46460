//! Custom Fields: leitura de definições e gravação de valores em cards
//!
//! Fluxo típico:
//! 1. `get_board_custom_fields` para descobrir IDs e tipos dos campos
//! 2. `set_custom_field` / `set_custom_field_by_item` para gravar o valor
//!
//! O valor é codificado ANTES da requisição: tipo não suportado, fonte lazy
//! quebrada ou `modelType` diferente de `card` falham sem tocar na rede.

use serde_json::{Map, Value};

use crate::args::Arguments;
use crate::client::{path_id, TrelloClient};
use crate::error::Result;
use crate::types::{CustomField, CustomFieldItem, CustomFieldValue};

impl TrelloClient {
    /// Busca a definição de um custom field
    ///
    /// `GET /1/customFields/{field_id}`
    pub async fn get_custom_field(&self, field_id: &str, args: &Arguments) -> Result<CustomField> {
        let path = format!("customFields/{}", path_id("custom field", field_id)?);
        self.get_json(&path, args).await
    }

    /// Todos os custom fields definidos no board
    ///
    /// `GET /1/boards/{board_id}/customFields`
    pub async fn get_board_custom_fields(
        &self,
        board_id: &str,
        args: &Arguments,
    ) -> Result<Vec<CustomField>> {
        let path = format!("boards/{}/customFields", path_id("board", board_id)?);
        let fields: Vec<CustomField> = self.get_json(&path, args).await?;

        tracing::info!("📋 Board {} tem {} custom fields", board_id, fields.len());
        Ok(fields)
    }

    /// Grava o valor de um custom field a partir de um item completo
    ///
    /// Body enviado: `{"value": <valor codificado>}`, ou `{"idValue": "..."}`
    /// quando o item seleciona uma opção de campo `list`.
    ///
    /// `PUT /1/cards/{idModel}/customField/{idCustomField}/item`
    ///
    /// # Erros (antes de qualquer requisição)
    ///
    /// - **UnsupportedModelType**: `model_type` presente e diferente de `card`
    /// - **UnsupportedType / UnresolvableSource**: valor sem encode possível (inclui item sem valor)
    /// - **ValidationError**: `id_model` ou `id_custom_field` vazios
    pub async fn set_custom_field_by_item(
        &self,
        item: &CustomFieldItem,
        extra: &Arguments,
    ) -> Result<()> {
        item.validate_model_type()?;

        let path = format!(
            "cards/{}/customField/{}/item",
            path_id("card", &item.id_model)?,
            path_id("custom field", &item.id_custom_field)?
        );

        let mut body = Map::new();
        match item.id_value.as_deref() {
            Some(option_id) if !option_id.is_empty() => {
                body.insert("idValue".to_string(), Value::String(option_id.to_string()));
            }
            _ => {
                body.insert("value".to_string(), item.value.to_wire()?.into_json()?);
            }
        }

        self.put(&path, extra, Some(&Value::Object(body))).await?;

        tracing::info!(
            "✅ Custom field {} atualizado no card {}",
            item.id_custom_field,
            item.id_model
        );
        Ok(())
    }

    /// Grava `value` no custom field `field_id` do card `card_id`
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// client.set_custom_field("card-id", "field-id", 42, &Arguments::defaults()).await?;
    /// client.set_custom_field("card-id", "field-id", true, &Arguments::defaults()).await?;
    /// client.set_custom_field("card-id", "field-id", "", &Arguments::defaults()).await?; // limpa
    /// ```
    pub async fn set_custom_field(
        &self,
        card_id: &str,
        field_id: &str,
        value: impl Into<CustomFieldValue>,
        extra: &Arguments,
    ) -> Result<()> {
        let item = CustomFieldItem::new(card_id, field_id, value);
        self.set_custom_field_by_item(&item, extra).await
    }
}
