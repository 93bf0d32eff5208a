use http::StatusCode;
use micro_response::{ResponseError, ResponseModel};

#[derive(Debug, Copy, Clone)]
pub struct BenchCase {
    name: &'static str,
    group: BenchGroup,
    payload: Payload,
}

impl BenchCase {
    pub fn new(name: &'static str, group: BenchGroup, payload: Payload) -> Self {
        Self { name, group, payload }
    }

    pub fn small(name: &'static str, payload: Payload) -> Self {
        Self::new(name, BenchGroup::Small, payload)
    }

    pub fn large(name: &'static str, payload: Payload) -> Self {
        Self::new(name, BenchGroup::Large, payload)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> BenchGroup {
        self.group
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Payload {
    file_name: &'static str,
    kind: PayloadKind,
    content: &'static str,
}

impl Payload {
    pub const fn new(file_name: &'static str, kind: PayloadKind, content: &'static str) -> Self {
        Self { file_name, kind, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Builds the response this payload is served as.
    ///
    /// # Errors
    ///
    /// Fails when a json payload does not parse or serialize.
    pub fn build(&self, status: StatusCode) -> Result<ResponseModel, ResponseError> {
        match self.kind {
            PayloadKind::Text => Ok(ResponseModel::text(status, self.content)),
            PayloadKind::Html => Ok(ResponseModel::html(status, self.content)),
            PayloadKind::Json => {
                let value: serde_json::Value = serde_json::from_str(self.content)?;
                ResponseModel::json(status, &value)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub enum BenchGroup {
    Small,
    Large,
}
