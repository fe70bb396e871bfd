pub mod config;
pub mod current_session;
pub mod login;
pub mod logout;
pub mod register;
pub mod token;

pub use current_session::CurrentSessionUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
