pub mod resolve_domain;

pub use resolve_domain::{select_method, ResolveDomainUseCase};
