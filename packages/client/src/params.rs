use fluentreq_rawquery::{encode_queries, Query};

/// A single URL parameter, consisting of a key and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    /// Build a parameter. Values go through `ToString`, so numbers render as
    /// their decimal text.
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// Parameter keys, used to drop multiple keys from a [`Params`] at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamKeys(Vec<String>);

impl ParamKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear membership test over the stored keys.
    pub fn exists(&self, name: &str) -> bool {
        self.0.iter().any(|key| key == name)
    }
}

impl<S: Into<String>> FromIterator<S> for ParamKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ParamKeys {
    fn from(keys: [S; N]) -> Self {
        keys.into_iter().collect()
    }
}

/// An ordered parameter collection.
///
/// Keys are not required to be unique; lookups return the first match in
/// insertion order. Removal operations build a new collection and leave the
/// original untouched, so a `Params` can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push(Param::new(key, value));
        self
    }

    /// Value of the first parameter whose key matches `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|param| param.key == name)
            .map(|param| param.value.as_str())
    }

    /// Like [`Params::get`], but yields an empty string when absent.
    pub fn by_name(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// New collection with every occurrence of `name` excluded; relative
    /// order of the rest is preserved.
    pub fn remove(&self, name: &str) -> Params {
        Self(
            self.0
                .iter()
                .filter(|param| param.key != name)
                .cloned()
                .collect(),
        )
    }

    /// New collection with every parameter whose key appears in `names`
    /// excluded.
    pub fn removes(&self, names: &ParamKeys) -> Params {
        Self(
            self.0
                .iter()
                .filter(|param| !names.exists(&param.key))
                .cloned()
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|param| (param.key.as_str(), param.value.as_str()))
    }

    /// Render as a raw query string for merging into a request URL. No
    /// escaping is applied, matching the rawquery codec.
    pub fn to_raw_query(&self) -> String {
        let queries: Vec<Query> = self
            .0
            .iter()
            .map(|param| Query::new(param.key.as_str(), param.value.as_str()))
            .collect();
        encode_queries(&queries)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| Param::new(key, value))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
