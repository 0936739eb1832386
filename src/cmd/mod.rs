//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module     | Commands handled                          |
//! |------------|-------------------------------------------|
//! | `menu`     | `Menu`                                    |
//! | `build`    | `Build`                                   |
//! | `cart`     | `Cart`                                    |
//! | `checkout` | `Checkout`                                |
//! | `orders`   | `Orders`, `Order`                         |
//! | `account`  | `Login`, `Register`, `Logout`, `Account`  |
//! | `config`   | `Config`                                  |

pub mod account;
pub mod build;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod menu;
pub mod orders;

pub use account::{cmd_forgot_password, cmd_login, cmd_logout, cmd_register, cmd_verify_email};
pub use build::cmd_build;
pub use cart::cmd_cart;
pub use checkout::cmd_checkout;
pub use config::cmd_config;
pub use menu::cmd_menu;
pub use orders::{cmd_order_detail, cmd_orders};
