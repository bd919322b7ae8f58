use crate::access::AccessKey;
use axum::extract::FromRef;
use driver::database::PostgresDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(access_key: AccessKey) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(access_key).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

impl FromRef<AppModule> for AccessKey {
    fn from_ref(module: &AppModule) -> Self {
        module.access_key().clone()
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    access_key: AccessKey,
}

impl Handler {
    pub async fn init(access_key: AccessKey) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self { pgpool, access_key })
    }
}
