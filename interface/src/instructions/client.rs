//! Instruction builders for off-chain clients. Each struct lists an instruction's accounts in
//! order and turns them plus the instruction data into a `solana_instruction::Instruction`.

use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use std::vec;

use crate::{
    instructions::{
        CreateCheckInstructionData,
        IntroduceYourselfInstructionData,
        SetDataInstructionData,
        XbasicInstruction,
    },
    pack::Pack,
    program,
    state::SYSTEM_PROGRAM_ID,
};

pub struct Initialize {
    pub my_account: Address,
    pub user: Address,
}

impl Initialize {
    pub fn create_instruction(&self, data: SetDataInstructionData) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![
                AccountMeta::new(self.my_account, true),
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: data.pack_tagged(XbasicInstruction::Initialize as u8),
        }
    }
}

pub struct Update {
    pub my_account: Address,
}

impl Update {
    pub fn create_instruction(&self, data: SetDataInstructionData) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![AccountMeta::new(self.my_account, false)],
            data: data.pack_tagged(XbasicInstruction::Update as u8),
        }
    }
}

pub struct IntroduceYourself {
    pub payer: Address,
    pub visitor: Address,
    pub visitor_state: Address,
}

impl IntroduceYourself {
    pub fn create_instruction(&self, data: IntroduceYourselfInstructionData) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![
                AccountMeta::new(self.payer, true),
                AccountMeta::new_readonly(self.visitor, true),
                AccountMeta::new(self.visitor_state, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: data.pack_tagged(XbasicInstruction::IntroduceYourself as u8),
        }
    }
}

pub struct Visit {
    pub visitor: Address,
    pub visitor_state: Address,
}

impl Visit {
    pub fn create_instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![
                AccountMeta::new_readonly(self.visitor, true),
                AccountMeta::new(self.visitor_state, false),
            ],
            data: vec![XbasicInstruction::Visit as u8],
        }
    }
}

pub struct CreateCheck {
    pub check: Address,
    pub vault: Address,
    pub check_signer: Address,
    pub from: Address,
    pub to: Address,
    pub owner: Address,
    pub token_program: Address,
}

impl CreateCheck {
    pub fn create_instruction(&self, amount: u64, nonce: u8, memo: Option<&[u8]>) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![
                AccountMeta::new(self.check, false),
                AccountMeta::new(self.vault, false),
                AccountMeta::new_readonly(self.check_signer, false),
                AccountMeta::new(self.from, false),
                AccountMeta::new_readonly(self.to, false),
                AccountMeta::new_readonly(self.owner, true),
                AccountMeta::new_readonly(self.token_program, false),
            ],
            data: CreateCheckInstructionData::pack_with_memo(amount, nonce, memo),
        }
    }
}

pub struct CashCheck {
    pub check: Address,
    pub vault: Address,
    pub check_signer: Address,
    pub to: Address,
    pub owner: Address,
    pub token_program: Address,
}

impl CashCheck {
    pub fn create_instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: vec![
                AccountMeta::new(self.check, false),
                AccountMeta::new(self.vault, false),
                AccountMeta::new_readonly(self.check_signer, false),
                AccountMeta::new(self.to, false),
                AccountMeta::new_readonly(self.owner, true),
                AccountMeta::new_readonly(self.token_program, false),
            ],
            data: vec![XbasicInstruction::CashCheck as u8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_metas_and_data() {
        let ix = Initialize {
            my_account: Address::new_from_array([1; 32]),
            user: Address::new_from_array([2; 32]),
        }
        .create_instruction(SetDataInstructionData::new(1234));

        assert_eq!(ix.program_id, program::ID);
        assert_eq!(ix.data[0], XbasicInstruction::Initialize as u8);
        assert_eq!(&ix.data[1..], &1234u64.to_le_bytes());
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, SYSTEM_PROGRAM_ID);
    }

    #[test]
    fn cash_check_signer_is_owner_only() {
        let owner = Address::new_from_array([5; 32]);
        let ix = CashCheck {
            check: Address::new_from_array([1; 32]),
            vault: Address::new_from_array([2; 32]),
            check_signer: Address::new_from_array([3; 32]),
            to: Address::new_from_array([4; 32]),
            owner,
            token_program: Address::new_from_array([6; 32]),
        }
        .create_instruction();

        let signers: std::vec::Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, owner);
        assert_eq!(ix.data, vec![XbasicInstruction::CashCheck as u8]);
    }
}
