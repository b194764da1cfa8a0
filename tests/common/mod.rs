#![allow(dead_code)]

use std::path::PathBuf;

use http_helper::{AsyncRequestHelper, ClientConfig, RequestHelper};
use httpmock::MockServer;
use tempfile::TempDir;

pub fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.set_base_address(&server.base_url()).unwrap();
    config
}

pub fn helper_for(server: &MockServer) -> RequestHelper {
    RequestHelper::new(config_for(server)).unwrap()
}

pub fn async_helper_for(server: &MockServer) -> AsyncRequestHelper {
    AsyncRequestHelper::new(config_for(server)).unwrap()
}

pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Scratch {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
