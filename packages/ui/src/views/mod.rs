mod auth_forms;
pub use auth_forms::{LoginView, RegisterView};

mod recipe_list;
pub use recipe_list::RecipeListView;

mod recipe_detail;
pub use recipe_detail::RecipeDetailView;

mod recipe_form;
pub use recipe_form::RecipeFormView;
