use client::{
    context::{
        token::TokenContext,
        xbasic::CheckAddresses,
    },
    e2e_helpers::E2e,
    pda::find_check_signer_address,
};
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};
use xbasic_interface::state::{
    check::Check,
    transmutable::Transmutable,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new(None, None).await?;
    let payer = &e2e.payer;

    let token = TokenContext::create_new(&e2e.rpc).await?;
    let from = token
        .create_token_account(&e2e.rpc, payer, &payer.pubkey())
        .await?;
    let to = token
        .create_token_account(&e2e.rpc, payer, &payer.pubkey())
        .await?;
    token.mint_to(&e2e.rpc, payer, &from, 500).await?;

    let check = Keypair::new();
    let (check_signer, _nonce) = find_check_signer_address(&check.pubkey());
    let vault = token
        .create_token_account(&e2e.rpc, payer, &check_signer)
        .await?;
    let addresses = CheckAddresses::new(check.pubkey(), vault);

    let rent = e2e
        .rpc
        .client
        .get_minimum_balance_for_rent_exemption(Check::LEN)
        .await?;
    let allocate = e2e
        .xbasic
        .allocate_check(&payer.pubkey(), &check.pubkey(), rent);
    let create = e2e.xbasic.create_check(
        &addresses,
        from,
        to,
        payer.pubkey(),
        250,
        Some(&b"gm"[..]),
    );
    e2e.rpc
        .send_and_confirm_txn(payer, &[&check], &[allocate, create])
        .await?;

    println!("{:#?}", e2e.view_check(&check.pubkey()).await?);

    let res = e2e
        .rpc
        .send_single_signer(payer, [e2e.xbasic.cash_check(&addresses, to, payer.pubkey())])
        .await?;

    println!("Transaction signature: {}", res.signature);
    println!("{:#?}", e2e.view_check(&check.pubkey()).await?);
    println!("Receiver balance: {}", token.get_balance(&e2e.rpc, &to).await?);

    Ok(())
}
