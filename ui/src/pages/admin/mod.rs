mod dashboard;
mod leads;
mod login;

pub use dashboard::DashboardPage;
pub use leads::LeadsPage;
pub use login::LoginPage;
