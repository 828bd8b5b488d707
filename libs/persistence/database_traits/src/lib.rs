pub mod dao;
pub mod error;

pub use dao::GenericDao;
pub use error::StoreError;
