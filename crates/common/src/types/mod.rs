use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Landing message served at `/`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

/// Acknowledgement returned by delete endpoints.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
