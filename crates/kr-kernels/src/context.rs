/// Execution context handed to every kernel by the surrounding runtime.
///
/// Reserved for memory planning and error reporting. `bmm_out` accepts it
/// and ignores it.
#[derive(Debug, Default)]
pub struct KernelRuntimeContext {
    _private: (),
}

impl KernelRuntimeContext {
    pub fn new() -> Self {
        Self::default()
    }
}
