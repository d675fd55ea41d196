mod layout;
pub use layout::Shell;

mod recipes;
pub use recipes::{Home, NewRecipe, RecipeDetail};

mod login;
pub use login::Login;

mod register;
pub use register::Register;
