//! Valores de custom fields do Trello
//!
//! O Trello troca o valor atual de um custom field num objeto com quatro chaves
//! possíveis, todas strings:
//!
//! ```json
//! { "text": "..." }  { "number": "42" }  { "date": "2021-06-01T10:00:00Z" }  { "checked": "true" }
//! ```
//!
//! e usa a string vazia pura (`""`) para limpar o campo.
//!
//! ⚠️ IMPORTANTE: `number` e `checked` são STRINGS no fio, não number/boolean!
//! ⚠️ IMPORTANTE: `date` precisa estar exatamente em `YYYY-MM-DDTHH:MM:SSZ` (UTC).

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Result, TrelloError};

/// Formato de data aceito pelo Trello para custom fields
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// Aceita frações de segundo na leitura ("2018-03-13T16:00:00.000Z")
const DATE_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Limite de resoluções encadeadas de uma fonte lazy
pub const MAX_RESOLVE_STEPS: usize = 16;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fonte de valor avaliada só no momento do encode (ex: leitura tardia de config)
///
/// Pode devolver outra fonte lazy; o encode resolve de novo até chegar num
/// valor primitivo ou estourar [`MAX_RESOLVE_STEPS`].
pub trait ResolveValue: Send + Sync {
    fn resolve(&self) -> std::result::Result<CustomFieldValue, BoxError>;
}

impl<F> ResolveValue for F
where
    F: Fn() -> std::result::Result<CustomFieldValue, BoxError> + Send + Sync,
{
    fn resolve(&self) -> std::result::Result<CustomFieldValue, BoxError> {
        self()
    }
}

/// Forma do valor no fio (no máximo um campo preenchido)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub checked: String,
}

impl WireValue {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn number(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    pub fn date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn checked(checked: bool) -> Self {
        Self {
            checked: if checked { "true" } else { "false" }.to_string(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.number.is_empty()
            && self.date.is_empty()
            && self.checked.is_empty()
    }
}

/// Resultado do encode: o objeto do fio ou a string vazia pura
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncodedValue {
    /// `""` - limpa o campo
    Empty(&'static str),
    Wire(WireValue),
}

impl EncodedValue {
    pub const EMPTY: EncodedValue = EncodedValue::Empty("");

    pub fn is_empty(&self) -> bool {
        matches!(self, EncodedValue::Empty(_))
    }

    pub fn into_json(self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Valor de um custom field
///
/// Exatamente uma representação fica ativa por vez. `Dynamic` e `Lazy` só
/// existem do lado de entrada: são convertidas no encode e nunca aparecem
/// como resultado de um decode.
#[derive(Clone, Default)]
pub enum CustomFieldValue {
    /// Nenhum valor (campo vazio)
    #[default]
    Unset,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// Já no formato do fio, enviado sem alteração
    Raw(WireValue),
    /// Valor não tipado vindo do chamador (ex: JSON de configuração)
    Dynamic(JsonValue),
    /// Fonte resolvida só no encode
    Lazy(Arc<dyn ResolveValue>),
}

impl CustomFieldValue {
    pub fn new(value: impl Into<CustomFieldValue>) -> Self {
        value.into()
    }

    pub fn lazy(source: impl ResolveValue + 'static) -> Self {
        CustomFieldValue::Lazy(Arc::new(source))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, CustomFieldValue::Unset)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CustomFieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CustomFieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CustomFieldValue::Float(f) => Some(*f),
            CustomFieldValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CustomFieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            CustomFieldValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Converte para o formato do fio
    ///
    /// Fontes lazy são resolvidas antes; tipos sem mapeamento falham com
    /// `UnsupportedType` sem produzir saída. `Unset` também falha: limpar o
    /// campo exige o texto vazio explícito.
    pub fn to_wire(&self) -> Result<EncodedValue> {
        let resolved = self.resolved()?;

        match resolved {
            CustomFieldValue::Unset => Err(TrelloError::UnsupportedType("unset".to_string())),
            CustomFieldValue::Text(s) if s.is_empty() => Ok(EncodedValue::EMPTY),
            CustomFieldValue::Text(s) => Ok(EncodedValue::Wire(WireValue::text(s))),
            CustomFieldValue::Integer(n) => {
                Ok(EncodedValue::Wire(WireValue::number(n.to_string())))
            }
            CustomFieldValue::Float(f) if !f.is_finite() => Err(TrelloError::UnsupportedType(
                format!("non-finite number {}", f),
            )),
            CustomFieldValue::Float(f) => {
                // Mesmo formato do `%f`: ponto fixo, 6 casas
                Ok(EncodedValue::Wire(WireValue::number(format!("{:.6}", f))))
            }
            CustomFieldValue::Boolean(b) => Ok(EncodedValue::Wire(WireValue::checked(b))),
            CustomFieldValue::Timestamp(t) => Ok(EncodedValue::Wire(WireValue::date(
                t.format(DATE_FORMAT).to_string(),
            ))),
            CustomFieldValue::Raw(wire) => Ok(EncodedValue::Wire(wire)),
            CustomFieldValue::Dynamic(json) => Err(TrelloError::UnsupportedType(
                json_type_name(&json).to_string(),
            )),
            CustomFieldValue::Lazy(_) => Err(TrelloError::UnresolvableSource(
                "lazy value left unresolved".to_string(),
            )),
        }
    }

    /// Converte do formato do fio
    ///
    /// Precedência fixa, o primeiro campo preenchido vence:
    /// `text` → `date` → `checked` → `number`. Nenhum preenchido → `Unset`.
    pub fn from_wire(wire: &WireValue) -> Result<Self> {
        if !wire.text.is_empty() {
            return Ok(CustomFieldValue::Text(wire.text.clone()));
        }

        if !wire.date.is_empty() {
            // Erro aqui aborta o decode, não tenta os outros campos
            return parse_date(&wire.date).map(CustomFieldValue::Timestamp);
        }

        if !wire.checked.is_empty() {
            return Ok(CustomFieldValue::Boolean(wire.checked == "true"));
        }

        if !wire.number.is_empty() {
            return parse_number(&wire.number);
        }

        Ok(CustomFieldValue::Unset)
    }

    /// Resolve fontes lazy e valores dinâmicos até um valor primitivo
    fn resolved(&self) -> Result<CustomFieldValue> {
        let mut current = self.clone();

        for _ in 0..=MAX_RESOLVE_STEPS {
            current = match current {
                CustomFieldValue::Lazy(source) => source
                    .resolve()
                    .map_err(|e| TrelloError::UnresolvableSource(e.to_string()))?,
                CustomFieldValue::Dynamic(json) => from_dynamic(json)?,
                primitive => return Ok(primitive),
            };
        }

        Err(TrelloError::UnresolvableSource(format!(
            "value did not resolve after {} steps",
            MAX_RESOLVE_STEPS
        )))
    }
}

/// `YYYY-MM-DDTHH:MM:SS[.fff]Z` com todos os campos em largura fixa
///
/// O chrono aceita `%m`, `%d`, `%H`... com um dígito só, então o formato é
/// conferido antes do parse.
fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if !has_fixed_date_shape(raw) {
        return Err(TrelloError::DateParse(format!(
            "{} (expected YYYY-MM-DDTHH:MM:SSZ)",
            raw
        )));
    }

    NaiveDateTime::parse_from_str(raw, DATE_PARSE_FORMAT)
        .map(|parsed| parsed.and_utc())
        .map_err(|e| TrelloError::DateParse(format!("{}: {}", raw, e)))
}

fn has_fixed_date_shape(raw: &str) -> bool {
    let b = raw.as_bytes();
    if b.len() < 20 || b[b.len() - 1] != b'Z' {
        return false;
    }

    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
    let fixed = digits(0..4)
        && b[4] == b'-'
        && digits(5..7)
        && b[7] == b'-'
        && digits(8..10)
        && b[10] == b'T'
        && digits(11..13)
        && b[13] == b':'
        && digits(14..16)
        && b[16] == b':'
        && digits(17..19);

    fixed
        && match &b[19..b.len() - 1] {
            [] => true,
            [b'.', fraction @ ..] => {
                !fraction.is_empty() && fraction.iter().all(u8::is_ascii_digit)
            }
            _ => false,
        }
}

/// Tentativas em sequência: inteiro → f64 → f32 → i64 base 10
fn parse_number(raw: &str) -> Result<CustomFieldValue> {
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(CustomFieldValue::Integer(n));
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Ok(CustomFieldValue::Float(f));
    }
    if let Ok(f) = raw.parse::<f32>() {
        return Ok(CustomFieldValue::Float(f as f64));
    }
    if let Ok(n) = i64::from_str_radix(raw.trim_start_matches('+'), 10) {
        return Ok(CustomFieldValue::Integer(n));
    }

    Err(TrelloError::NumberConversion(raw.to_string()))
}

fn from_dynamic(json: JsonValue) -> Result<CustomFieldValue> {
    match json {
        JsonValue::String(s) => Ok(CustomFieldValue::Text(s)),
        JsonValue::Bool(b) => Ok(CustomFieldValue::Boolean(b)),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(CustomFieldValue::Integer(i)),
            None => n
                .as_f64()
                .map(CustomFieldValue::Float)
                .ok_or_else(|| TrelloError::UnsupportedType(format!("number {}", n))),
        },
        other => Err(TrelloError::UnsupportedType(
            json_type_name(&other).to_string(),
        )),
    }
}

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl fmt::Debug for CustomFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomFieldValue::Unset => write!(f, "Unset"),
            CustomFieldValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            CustomFieldValue::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            CustomFieldValue::Float(x) => f.debug_tuple("Float").field(x).finish(),
            CustomFieldValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            CustomFieldValue::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            CustomFieldValue::Raw(w) => f.debug_tuple("Raw").field(w).finish(),
            CustomFieldValue::Dynamic(j) => f.debug_tuple("Dynamic").field(j).finish(),
            CustomFieldValue::Lazy(_) => write!(f, "Lazy(..)"),
        }
    }
}

impl PartialEq for CustomFieldValue {
    fn eq(&self, other: &Self) -> bool {
        use CustomFieldValue::*;
        match (self, other) {
            (Unset, Unset) => true,
            (Text(a), Text(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (Timestamp(a), Timestamp(b)) => a == b,
            (Raw(a), Raw(b)) => a == b,
            (Dynamic(a), Dynamic(b)) => a == b,
            (Lazy(a), Lazy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for CustomFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomFieldValue::Unset => Ok(()),
            CustomFieldValue::Text(s) => write!(f, "{}", s),
            CustomFieldValue::Integer(n) => write!(f, "{}", n),
            CustomFieldValue::Float(x) => write!(f, "{}", x),
            CustomFieldValue::Boolean(b) => write!(f, "{}", b),
            CustomFieldValue::Timestamp(t) => write!(f, "{}", t.format(DATE_FORMAT)),
            CustomFieldValue::Raw(w) => write!(f, "{:?}", w),
            CustomFieldValue::Dynamic(j) => write!(f, "{}", j),
            CustomFieldValue::Lazy(_) => write!(f, "<lazy>"),
        }
    }
}

impl Serialize for CustomFieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_wire()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomFieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Null => Ok(CustomFieldValue::Unset),
            JsonValue::String(s) if s.is_empty() => Ok(CustomFieldValue::Unset),
            JsonValue::String(s) => Ok(CustomFieldValue::Text(s)),
            obj @ JsonValue::Object(_) => {
                let wire: WireValue = serde_json::from_value(obj).map_err(de::Error::custom)?;
                CustomFieldValue::from_wire(&wire).map_err(de::Error::custom)
            }
            other => Err(de::Error::custom(format!(
                "unexpected custom field value: {}",
                json_type_name(&other)
            ))),
        }
    }
}

// ==================== CONVERSÕES ====================

impl From<String> for CustomFieldValue {
    fn from(value: String) -> Self {
        CustomFieldValue::Text(value)
    }
}

impl From<&str> for CustomFieldValue {
    fn from(value: &str) -> Self {
        CustomFieldValue::Text(value.to_string())
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CustomFieldValue {
                fn from(value: $t) -> Self {
                    CustomFieldValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for CustomFieldValue {
    fn from(value: f64) -> Self {
        CustomFieldValue::Float(value)
    }
}

impl From<f32> for CustomFieldValue {
    fn from(value: f32) -> Self {
        CustomFieldValue::Float(f64::from(value))
    }
}

impl From<bool> for CustomFieldValue {
    fn from(value: bool) -> Self {
        CustomFieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for CustomFieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        CustomFieldValue::Timestamp(value)
    }
}

impl From<WireValue> for CustomFieldValue {
    fn from(value: WireValue) -> Self {
        CustomFieldValue::Raw(value)
    }
}

impl From<JsonValue> for CustomFieldValue {
    fn from(value: JsonValue) -> Self {
        CustomFieldValue::Dynamic(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn encode(value: &CustomFieldValue) -> JsonValue {
        serde_json::to_value(value).unwrap()
    }

    fn decode(json: JsonValue) -> Result<CustomFieldValue> {
        let wire: WireValue = serde_json::from_value(json).unwrap();
        CustomFieldValue::from_wire(&wire)
    }

    #[test]
    fn test_encode_primitives() {
        assert_eq!(encode(&"probando".into()), json!({"text": "probando"}));
        assert_eq!(encode(&42.into()), json!({"number": "42"}));
        assert_eq!(encode(&3.14.into()), json!({"number": "3.140000"}));
        assert_eq!(encode(&true.into()), json!({"checked": "true"}));
        assert_eq!(encode(&false.into()), json!({"checked": "false"}));

        let ts = Utc.with_ymd_and_hms(2021, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(encode(&ts.into()), json!({"date": "2021-06-01T10:00:00Z"}));
    }

    #[test]
    fn test_empty_string_is_bare_empty() {
        let encoded = CustomFieldValue::from("").to_wire().unwrap();
        assert!(encoded.is_empty());
        assert_eq!(encode(&"".into()), json!(""));
        assert_ne!(encode(&"".into()), json!({"text": ""}));

        let decoded: CustomFieldValue = serde_json::from_value(json!("")).unwrap();
        assert!(decoded.is_unset());
    }

    #[test]
    fn test_unset_is_not_a_clear() {
        let err = CustomFieldValue::Unset.to_wire().unwrap_err();
        assert!(matches!(err, TrelloError::UnsupportedType(ref t) if t == "unset"));
        assert!(serde_json::to_value(CustomFieldValue::default()).is_err());
    }

    #[test]
    fn test_non_finite_float_rejected() {
        for x in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = CustomFieldValue::Float(x).to_wire().unwrap_err();
            assert!(matches!(err, TrelloError::UnsupportedType(_)));
        }
    }

    #[test]
    fn test_raw_wire_passes_through() {
        let raw = WireValue {
            number: "007".to_string(),
            ..Default::default()
        };
        assert_eq!(encode(&raw.into()), json!({"number": "007"}));
    }

    #[test]
    fn test_unsupported_type_produces_no_output() {
        let value = CustomFieldValue::from(json!({"nested": {"a": 1}}));
        let err = value.to_wire().unwrap_err();
        assert!(matches!(err, TrelloError::UnsupportedType(ref t) if t == "object"));

        let err = CustomFieldValue::from(json!([1, 2])).to_wire().unwrap_err();
        assert!(matches!(err, TrelloError::UnsupportedType(_)));

        assert!(serde_json::to_value(CustomFieldValue::from(json!(null))).is_err());
    }

    #[test]
    fn test_dynamic_primitives_map_to_typed_variants() {
        assert_eq!(encode(&json!("abc").into()), json!({"text": "abc"}));
        assert_eq!(encode(&json!(7).into()), json!({"number": "7"}));
        assert_eq!(encode(&json!(1.5).into()), json!({"number": "1.500000"}));
        assert_eq!(encode(&json!(true).into()), json!({"checked": "true"}));
    }

    #[test]
    fn test_round_trip_supported_kinds() {
        let values = vec![
            CustomFieldValue::from("otra prueba"),
            CustomFieldValue::from(-17i64),
            CustomFieldValue::from(2.5f64),
            CustomFieldValue::from(true),
            CustomFieldValue::from(false),
            CustomFieldValue::from(Utc.with_ymd_and_hms(2019, 12, 31, 23, 59, 59).unwrap()),
        ];

        for value in values {
            let json = encode(&value);
            let back: CustomFieldValue = serde_json::from_value(json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_decode_numbers() {
        assert_eq!(
            decode(json!({"number": "3.14"})).unwrap(),
            CustomFieldValue::Float(3.14)
        );
        assert_eq!(
            decode(json!({"number": "42"})).unwrap(),
            CustomFieldValue::Integer(42)
        );

        let err = decode(json!({"number": "abc"})).unwrap_err();
        assert!(matches!(err, TrelloError::NumberConversion(ref s) if s == "abc"));
        assert_eq!(err.to_string(), "cannot convert abc to number");
    }

    #[test]
    fn test_decode_dates() {
        let expected = Utc.with_ymd_and_hms(2021, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(
            decode(json!({"date": "2021-06-01T10:00:00Z"})).unwrap(),
            CustomFieldValue::Timestamp(expected)
        );

        // Trello devolve milissegundos nas leituras
        assert_eq!(
            decode(json!({"date": "2021-06-01T10:00:00.000Z"})).unwrap(),
            CustomFieldValue::Timestamp(expected)
        );
    }

    #[test]
    fn test_decode_rejects_short_date_fields() {
        for bad in [
            "2021-6-1T10:00:00Z",
            "2021-06-01T1:0:0Z",
            "2021-06-01T10:00:00",
            "2021-06-01 10:00:00Z",
            "2021-06-01T10:00:00.Z",
            "2021-06-01T10:00:00+00:00",
        ] {
            let err = decode(json!({ "date": bad })).unwrap_err();
            assert!(matches!(err, TrelloError::DateParse(ref m) if m.contains(bad)), "{}", bad);
        }

        let err = decode(json!({"date": "2021-13-01T10:00:00Z"})).unwrap_err();
        assert!(matches!(err, TrelloError::DateParse(_)));
    }

    #[test]
    fn test_bad_date_does_not_fall_through() {
        let err = decode(json!({"date": "not-a-date", "checked": "true", "number": "1"}))
            .unwrap_err();
        assert!(matches!(err, TrelloError::DateParse(_)));
    }

    #[test]
    fn test_decode_checked() {
        assert_eq!(
            decode(json!({"checked": "true"})).unwrap(),
            CustomFieldValue::Boolean(true)
        );
        assert_eq!(
            decode(json!({"checked": "false"})).unwrap(),
            CustomFieldValue::Boolean(false)
        );
        assert_eq!(
            decode(json!({"checked": "yes"})).unwrap(),
            CustomFieldValue::Boolean(false)
        );
    }

    #[test]
    fn test_decode_precedence_first_match_wins() {
        assert_eq!(
            decode(json!({"text": "hello", "number": "abc"})).unwrap(),
            CustomFieldValue::Text("hello".to_string())
        );
        assert_eq!(
            decode(json!({"checked": "true", "number": "5"})).unwrap(),
            CustomFieldValue::Boolean(true)
        );
    }

    #[test]
    fn test_decode_nothing_populated_is_unset() {
        assert!(decode(json!({})).unwrap().is_unset());

        let value: CustomFieldValue = serde_json::from_value(json!(null)).unwrap();
        assert!(value.is_unset());
    }

    struct Chain(usize);

    impl ResolveValue for Chain {
        fn resolve(&self) -> std::result::Result<CustomFieldValue, BoxError> {
            if self.0 == 0 {
                Ok(CustomFieldValue::from(99))
            } else {
                Ok(CustomFieldValue::lazy(Chain(self.0 - 1)))
            }
        }
    }

    struct Broken;

    impl ResolveValue for Broken {
        fn resolve(&self) -> std::result::Result<CustomFieldValue, BoxError> {
            Err("secret store offline".into())
        }
    }

    struct Forever;

    impl ResolveValue for Forever {
        fn resolve(&self) -> std::result::Result<CustomFieldValue, BoxError> {
            Ok(CustomFieldValue::lazy(Forever))
        }
    }

    #[test]
    fn test_lazy_values_resolve_repeatedly() {
        let value = CustomFieldValue::lazy(Chain(3));
        assert_eq!(encode(&value), json!({"number": "99"}));
    }

    #[test]
    fn test_lazy_closure_source() {
        let value = CustomFieldValue::lazy(|| -> std::result::Result<CustomFieldValue, BoxError> {
            Ok(CustomFieldValue::from("late"))
        });
        assert_eq!(encode(&value), json!({"text": "late"}));
    }

    #[test]
    fn test_lazy_failure_is_unresolvable() {
        let err = CustomFieldValue::lazy(Broken).to_wire().unwrap_err();
        match err {
            TrelloError::UnresolvableSource(msg) => assert!(msg.contains("secret store offline")),
            other => panic!("Expected UnresolvableSource, got {:?}", other),
        }
    }

    #[test]
    fn test_lazy_chain_is_bounded() {
        let err = CustomFieldValue::lazy(Forever).to_wire().unwrap_err();
        assert!(matches!(err, TrelloError::UnresolvableSource(_)));

        // Dentro do limite ainda resolve
        assert!(CustomFieldValue::lazy(Chain(MAX_RESOLVE_STEPS - 1))
            .to_wire()
            .is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(CustomFieldValue::from("abc").to_string(), "abc");
        assert_eq!(CustomFieldValue::from(5).to_string(), "5");
        assert_eq!(CustomFieldValue::Unset.to_string(), "");
    }
}
