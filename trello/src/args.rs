//! Argumentos extras de query string
//!
//! Quase todo endpoint do Trello aceita parâmetros opcionais (`fields`, `filter`,
//! `pos`, ...). Eles são passados como um `Arguments` e achatados na URL.

use std::collections::BTreeMap;

/// Conjunto ordenado de argumentos `chave=valor` para a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(BTreeMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nenhum argumento extra (defaults da API)
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Builder: adiciona um argumento e retorna self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Mescla outro conjunto; chaves de `other` sobrescrevem as existentes
    pub fn merge(&mut self, other: &Arguments) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Achata vários conjuntos em um só (o último vence)
    pub fn flatten<'a>(sets: impl IntoIterator<Item = &'a Arguments>) -> Self {
        let mut flat = Self::new();
        for set in sets {
            flat.merge(set);
        }
        flat
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pares prontos para `reqwest::RequestBuilder::query`
    pub(crate) fn as_query(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}
