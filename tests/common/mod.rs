//! Common test utilities and mock implementations


#[allow(unused_imports)]
pub use mock_interface::{MockError, Operation};
#[allow(unused_imports)]
pub use test_utils::{
    assert_float_eq, create_driver_with_config, create_initialized_driver, create_mock_driver,
};
