use anyhow::Result;
use std::{sync::Arc, time::Duration};

use crate::{
    notifications::{
        gateway::{PushGateway, dummy::DummyPushGateway, fcm::FcmPushGateway},
        service::DispatchService,
    },
    settings::{PushSettings, Settings},
};

pub struct AppContext {
    pub dispatch_service: DispatchService<dyn PushGateway>,
}

impl AppContext {
    /// Creates the application context, wiring the configured push gateway
    /// into the dispatch service.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let gateway: Arc<dyn PushGateway> = match &settings.push {
            PushSettings::Fcm {
                credentials_path,
                request_timeout_secs,
                endpoint,
            } => {
                let mut gateway = FcmPushGateway::from_file(
                    credentials_path,
                    Duration::from_secs(*request_timeout_secs),
                )?;
                if let Some(endpoint) = endpoint {
                    gateway = gateway.with_endpoint(endpoint.as_str());
                }
                Arc::new(gateway)
            }
            PushSettings::Dummy => Arc::new(DummyPushGateway),
        };

        Ok(Self {
            dispatch_service: DispatchService::new(gateway),
        })
    }
}
