
/// Entity round trips through the migrated schema
pub mod crud_tests;
