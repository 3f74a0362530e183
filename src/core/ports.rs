use crate::utils::error::Result;

/// Write seam for the export directory. The backend owns directory creation;
/// callers pass a bare file name, never a path.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
