//! Builders for every `xbasic` instruction from contextual address data.

use solana_address::Address;
use solana_instruction::Instruction;
use xbasic_interface::{
    instructions::{
        client::{
            CashCheck,
            CreateCheck,
            Initialize,
            IntroduceYourself,
            Update,
            Visit,
        },
        IntroduceYourselfInstructionData,
        SetDataInstructionData,
    },
    state::{
        check::Check,
        transmutable::Transmutable,
    },
};

use crate::pda::{
    find_check_signer_address,
    find_visitor_state_address,
};

/// Addresses for a single check: the check account, its signer PDA and the vault it escrows into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckAddresses {
    pub check: Address,
    pub check_signer: Address,
    pub nonce: u8,
    pub vault: Address,
}

impl CheckAddresses {
    /// Derives the check signer for `check`. The vault must be a token account owned by
    /// [`CheckAddresses::check_signer`].
    pub fn new(check: Address, vault: Address) -> Self {
        let (check_signer, nonce) = find_check_signer_address(&check);
        Self {
            check,
            check_signer,
            nonce,
            vault,
        }
    }
}

/// A stateless instruction factory for the `xbasic` program.
#[derive(Clone, Copy, Debug, Default)]
pub struct XbasicContext;

impl XbasicContext {
    pub fn initialize(&self, my_account: Address, user: Address, data: u64) -> Instruction {
        Initialize { my_account, user }.create_instruction(SetDataInstructionData::new(data))
    }

    pub fn update(&self, my_account: Address, data: u64) -> Instruction {
        Update { my_account }.create_instruction(SetDataInstructionData::new(data))
    }

    /// Derives the visitor state PDA and bump for `visitor` and builds the instruction that
    /// creates it.
    pub fn introduce_yourself(&self, payer: Address, visitor: Address) -> Instruction {
        let (visitor_state, bump) = find_visitor_state_address(&visitor);
        IntroduceYourself {
            payer,
            visitor,
            visitor_state,
        }
        .create_instruction(IntroduceYourselfInstructionData::new(bump))
    }

    pub fn visit(&self, visitor: Address) -> Instruction {
        let (visitor_state, _bump) = find_visitor_state_address(&visitor);
        Visit {
            visitor,
            visitor_state,
        }
        .create_instruction()
    }

    /// The system instruction that allocates a zeroed, program-owned check account. It must land
    /// before (or in the same transaction as) [`XbasicContext::create_check`], and the check
    /// keypair must sign it.
    pub fn allocate_check(
        &self,
        payer: &Address,
        check: &Address,
        rent_lamports: u64,
    ) -> Instruction {
        solana_system_interface::instruction::create_account(
            payer,
            check,
            rent_lamports,
            Check::LEN as u64,
            &xbasic::ID,
        )
    }

    /// Escrows `amount` from `from` into the check's vault. `owner` owns `from` and signs.
    pub fn create_check(
        &self,
        check: &CheckAddresses,
        from: Address,
        to: Address,
        owner: Address,
        amount: u64,
        memo: Option<&[u8]>,
    ) -> Instruction {
        CreateCheck {
            check: check.check,
            vault: check.vault,
            check_signer: check.check_signer,
            from,
            to,
            owner,
            token_program: spl_token_interface::ID,
        }
        .create_instruction(amount, check.nonce, memo)
    }

    /// Pays the check out to `to`. `owner` owns `to` and signs.
    pub fn cash_check(&self, check: &CheckAddresses, to: Address, owner: Address) -> Instruction {
        CashCheck {
            check: check.check,
            vault: check.vault,
            check_signer: check.check_signer,
            to,
            owner,
            token_program: spl_token_interface::ID,
        }
        .create_instruction()
    }
}
