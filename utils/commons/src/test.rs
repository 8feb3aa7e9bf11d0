use concordium_std::concordium_cfg_test;

#[concordium_cfg_test]
pub use inner::*;

#[concordium_cfg_test]
mod inner {
    use concordium_std::test_infrastructure::MockFn;
    use concordium_std::*;

    /// Mock entrypoint that parses its parameter as `D`, traps unless `check`
    /// accepts it and returns nothing.
    pub fn parse_and_check_mock<D: Deserial, S>(check: impl Fn(&D) -> bool + 'static) -> MockFn<S> {
        MockFn::new(move |parameter, _, _, _state| {
            let value =
                D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
            if !check(&value) {
                return Err(CallContractError::Trap);
            };
            Ok((false, Some(())))
        })
    }

    /// Mock entrypoint that always traps.
    pub fn trap_mock<S>() -> MockFn<S> {
        MockFn::new(|_, _, _, _state| Err(CallContractError::<()>::Trap))
    }
}
