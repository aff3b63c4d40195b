use crate::{
    models::{
        network_config::{Bech32Config, Bip44, Currency, GasPriceStep, NetworkConfig},
        token::TokenDescriptor,
        transfer::{Coin, Fee},
    },
    services::amount_service::DEFAULT_DECIMALS,
};

pub const PERSISTENCE_CHAIN_ID: &str = "core-1";
pub const RPC_ENDPOINT: &str = "https://rpc.core.persistence.one";
pub const REST_ENDPOINT: &str = "https://rest.core.persistence.one";

/// Account addresses on this chain start with the bech32 prefix plus the separator.
pub const ADDRESS_PREFIX: &str = "persistence1";
pub const MIN_ADDRESS_LEN: usize = 39;
pub const MAX_ADDRESS_LEN: usize = 65;

pub const FEE_DENOM: &str = "uxprt";
pub const FEE_AMOUNT: &str = "500000"; // 0.5 XPRT
pub const GAS_LIMIT: &str = "400000";
pub const TRANSFER_MEMO: &str = "Transfer CW20 tokens";

const CW20_TOKENS: [(&str, &str, &str); 2] = [
    (
        "persistence1euqmngymytlt8j707spv9hn6ajzy92ndfjk47pnlu9uzmfuyplhs47y4e7",
        "ATOM-XPRT LP",
        "ATOM-XPRT LP",
    ),
    (
        "persistence1l26l2qrvvf0mc4mrt3gpzunql6t2cp8jx52x0c4hu6hrlccw6l5sc2plfh",
        "PSTAKE-XPRT LP",
        "PSTAKE-XPRT LP",
    ),
];

fn xprt() -> Currency {
    Currency {
        coin_denom: "XPRT".to_string(),
        coin_minimal_denom: FEE_DENOM.to_string(),
        coin_decimals: 6,
    }
}

/// Chain registration info handed to the wallet extension before enabling `core-1`.
pub fn get_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: PERSISTENCE_CHAIN_ID.to_string(),
        chain_name: "Persistence".to_string(),
        rpc: RPC_ENDPOINT.to_string(),
        rest: REST_ENDPOINT.to_string(),
        bip44: Bip44 { coin_type: 750 },
        bech32_config: Bech32Config {
            bech32_prefix_acc_addr: "persistence".to_string(),
            bech32_prefix_acc_pub: "persistencepub".to_string(),
            bech32_prefix_val_addr: "persistencevaloper".to_string(),
            bech32_prefix_val_pub: "persistencevaloperpub".to_string(),
            bech32_prefix_cons_addr: "persistencevalcons".to_string(),
            bech32_prefix_cons_pub: "persistencevalconspub".to_string(),
        },
        currencies: vec![xprt()],
        fee_currencies: vec![xprt()],
        stake_currency: xprt(),
        gas_price_step: GasPriceStep {
            low: 0.01,
            average: 0.025,
            high: 0.04,
        },
        features: vec!["ibc-transfer".to_string()],
    }
}

/// The fixed set of CW20 tokens the client queries, with default decimals.
pub fn get_tokens() -> Vec<TokenDescriptor> {
    CW20_TOKENS
        .iter()
        .map(|(address, name, symbol)| TokenDescriptor {
            address: address.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: DEFAULT_DECIMALS,
        })
        .collect()
}

pub fn transfer_fee() -> Fee {
    Fee {
        amount: vec![Coin {
            denom: FEE_DENOM.to_string(),
            amount: FEE_AMOUNT.to_string(),
        }],
        gas: GAS_LIMIT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_tokens_use_chain_addresses() {
        let tokens = get_tokens();
        assert_eq!(tokens.len(), 2);
        for token in &tokens {
            assert!(token.address.starts_with(ADDRESS_PREFIX));
            assert_eq!(token.decimals, DEFAULT_DECIMALS);
        }
    }

    #[test]
    fn network_config_serializes_in_wallet_schema() {
        let json = serde_json::to_value(get_network_config()).unwrap();
        assert_eq!(json["chainId"], "core-1");
        assert_eq!(json["bip44"]["coinType"], 750);
        assert_eq!(json["bech32Config"]["bech32PrefixAccAddr"], "persistence");
        assert_eq!(json["feeCurrencies"][0]["coinMinimalDenom"], "uxprt");
        assert_eq!(json["stakeCurrency"]["coinDecimals"], 6);
    }

    #[test]
    fn fee_matches_transfer_defaults() {
        let fee = transfer_fee();
        assert_eq!(fee.gas, "400000");
        assert_eq!(fee.amount[0].denom, "uxprt");
        assert_eq!(fee.amount[0].amount, "500000");
    }
}
