/// Seam to the host application's notification system.
///
/// All notifications are dismissable; `detail` carries the longer failure
/// reason when there is one.
pub trait Notifier: Send + Sync {
    fn add_info(&self, message: &str, detail: Option<&str>);
    fn add_success(&self, message: &str, detail: Option<&str>);
    fn add_warning(&self, message: &str, detail: Option<&str>);
    fn add_error(&self, message: &str, detail: Option<&str>);
}
