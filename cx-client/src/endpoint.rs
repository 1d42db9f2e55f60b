use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyncMode {
    // POST to create, then GET/PUT/DELETE on `<path>/<id>`
    Crud,

    // One object per company: PUT on `<path>` overwrites it and DELETE resets it
    Singleton,
}

#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub path: &'static str,

    // JSON pointer to the new object's id in the create response
    pub id_pointer: &'static str,
    pub mode: SyncMode,
}

impl Endpoint {
    pub const fn crud(path: &'static str, id_pointer: &'static str) -> Endpoint {
        Endpoint { path, id_pointer, mode: SyncMode::Crud }
    }

    pub const fn singleton(path: &'static str) -> Endpoint {
        Endpoint { path, id_pointer: "", mode: SyncMode::Singleton }
    }

    pub fn extract_id(&self, response: &Value) -> Option<String> {
        match response.pointer(self.id_pointer)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
