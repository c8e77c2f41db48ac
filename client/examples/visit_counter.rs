use client::e2e_helpers::E2e;
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new(None, None).await?;
    let visitor = Keypair::new();

    let introduce = e2e
        .xbasic
        .introduce_yourself(e2e.payer_address(), visitor.pubkey());
    e2e.rpc
        .send_and_confirm_txn(&e2e.payer, &[&visitor], &[introduce])
        .await?;

    for _ in 0..3 {
        e2e.rpc
            .send_and_confirm_txn(&e2e.payer, &[&visitor], &[e2e.xbasic.visit(visitor.pubkey())])
            .await?;
    }

    println!("{:#?}", e2e.view_visitor_state(&visitor.pubkey()).await?);

    Ok(())
}
