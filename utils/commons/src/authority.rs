use crate::CustomContractError;
use concordium_std::*;

/// Administrative rights of a contract instance.
///
/// Admins manage both lists, maintainers only manage the maintainer list and
/// the contract configuration.
#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    admins: StateSet<Address, S>,
    maintainers: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(state_builder: &mut StateBuilder<S>, admin: Address) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(admin);
        Self {
            admins,
            maintainers: state_builder.new_set(),
        }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    pub fn has_maintainer_rights(&self, address: &Address) -> bool {
        self.maintainers.contains(address) || self.has_admin_rights(address)
    }

    /// Reject unless `address` is an admin or a maintainer.
    pub fn ensure_maintainer(&self, address: &Address) -> Result<(), CustomContractError> {
        ensure!(
            self.has_maintainer_rights(address),
            CustomContractError::Unauthorized
        );
        Ok(())
    }

    /// Apply an add/remove update on behalf of `sender`.
    ///
    /// The last admin can not be removed.
    pub fn handle_update(
        &mut self,
        sender: Address,
        update: AuthorityUpdateParams,
    ) -> Result<(), CustomContractError> {
        match update.field {
            AuthorityField::Maintainer => self.ensure_maintainer(&sender)?,
            AuthorityField::Admin => ensure!(
                self.has_admin_rights(&sender),
                CustomContractError::Unauthorized
            ),
        }

        match (update.field, update.kind) {
            (AuthorityField::Admin, AuthorityUpdateKind::Remove) => {
                let is_last = self.admins.contains(&update.address)
                    && self.admins.iter().take(2).count() == 1;
                ensure!(!is_last, CustomContractError::Unauthorized);
                self.admins.remove(&update.address);
            }
            (AuthorityField::Admin, AuthorityUpdateKind::Add) => {
                self.admins.insert(update.address);
            }
            (AuthorityField::Maintainer, AuthorityUpdateKind::Remove) => {
                self.maintainers.remove(&update.address);
            }
            (AuthorityField::Maintainer, AuthorityUpdateKind::Add) => {
                self.maintainers.insert(update.address);
            }
        }

        Ok(())
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        let address_list = match view.field {
            AuthorityField::Maintainer => &self.maintainers,
            AuthorityField::Admin => &self.admins,
        };

        address_list
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|address| *address)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, SchemaType, Serialize)]
pub enum AuthorityField {
    Maintainer,
    Admin,
}

#[derive(Debug, Clone, Copy, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub field: AuthorityField,
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub field: AuthorityField,
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: Address = Address::Account(AccountAddress([1; 32]));
    const MAINTAINER: Address = Address::Account(AccountAddress([2; 32]));
    const USER: Address = Address::Account(AccountAddress([16; 32]));
    const CONTRACT: Address = Address::Contract(ContractAddress {
        index: 16,
        subindex: 0,
    });

    fn update(
        field: AuthorityField,
        kind: AuthorityUpdateKind,
        address: Address,
    ) -> AuthorityUpdateParams {
        AuthorityUpdateParams {
            field,
            kind,
            address,
        }
    }

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut authority = Authority::new(&mut state_builder, ADMIN);
        authority.maintainers.insert(MAINTAINER);
        authority
    }

    #[concordium_test]
    fn test_admin_manages_both_lists() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            ADMIN,
            update(AuthorityField::Admin, AuthorityUpdateKind::Add, CONTRACT),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_admin_rights(&CONTRACT));

        let result = authority.handle_update(
            ADMIN,
            update(AuthorityField::Maintainer, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_maintainer_rights(&USER));
        claim!(!authority.has_admin_rights(&USER));
    }

    #[concordium_test]
    fn test_maintainer_can_not_touch_admins() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            MAINTAINER,
            update(AuthorityField::Admin, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized));
        claim!(!authority.has_admin_rights(&USER));

        let result = authority.handle_update(
            MAINTAINER,
            update(AuthorityField::Maintainer, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_maintainer_rights(&USER));
    }

    #[concordium_test]
    fn test_user_has_no_rights() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            USER,
            update(AuthorityField::Maintainer, AuthorityUpdateKind::Remove, MAINTAINER),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized));
        claim!(authority.has_maintainer_rights(&MAINTAINER));
        claim_eq!(
            authority.ensure_maintainer(&USER),
            Err(CustomContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_last_admin_is_kept() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            ADMIN,
            update(AuthorityField::Admin, AuthorityUpdateKind::Remove, ADMIN),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized));
        claim!(authority.has_admin_rights(&ADMIN));

        authority.admins.insert(CONTRACT);
        let result = authority.handle_update(
            ADMIN,
            update(AuthorityField::Admin, AuthorityUpdateKind::Remove, ADMIN),
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.has_admin_rights(&ADMIN));
        claim!(authority.has_admin_rights(&CONTRACT));
    }

    #[concordium_test]
    fn test_view_pages_through_maintainers() {
        let mut authority = default_authority();
        for n in 16u8..48 {
            authority
                .maintainers
                .insert(Address::Account(AccountAddress([n; 32])));
        }

        let mut seen = Vec::new();
        let mut skip = 0;
        loop {
            let page = authority.handle_view(AuthorityViewParams {
                field: AuthorityField::Maintainer,
                skip,
                show: 10,
            });
            let len = page.len();
            seen.extend(page);
            if len < 10 {
                break;
            }
            skip += 10;
        }

        // 32 added plus the default maintainer
        claim_eq!(seen.len(), 33);
        claim!(seen.contains(&MAINTAINER));
    }
}
