//! Repository traits and their carrier types

mod repositories;

pub use repositories::{
    LockoutStatus, NewProduct, NewSale, NewUser, ProductChanges, ProductRepository, RepoResult,
    SaleRepository, UserChanges, UserRepository,
};
