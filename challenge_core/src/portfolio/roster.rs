use super::dto::{
    INITIAL_VALUE, Portfolio, PortfolioId, Portfolios, PriceSourceKind, TokenHolding,
};

/// Holdings are fixed for the whole challenge; only prices move.
pub fn easy_portfolio() -> Portfolio {
    Portfolio {
        id: PortfolioId::Easy,
        name: PortfolioId::Easy.display_name().to_string(),
        source: PriceSourceKind::CoinGecko,
        holdings: vec![
            TokenHolding::lookup("ENA", "ethena", 2449.0, "ethereum", "ENA.webp"),
            TokenHolding::lookup("LTC", "litecoin", 15.97, "litecoin", "LTC.webp"),
            TokenHolding::lookup("HYPE", "hyperliquid", 44.58, "hyperliquid", "HYPE.jpg"),
            TokenHolding::lookup("PUMP", "pump-fun", 533902.0, "solana", "pump.jpg"),
            TokenHolding::lookup("LINK", "chainlink", 91.0, "ethereum", "LINK.webp"),
        ],
        total_value: 0.0,
        total_value_24h_ago: 0.0,
        initial_value: INITIAL_VALUE,
    }
}

pub fn clemente_portfolio() -> Portfolio {
    Portfolio {
        id: PortfolioId::Clemente,
        name: PortfolioId::Clemente.display_name().to_string(),
        source: PriceSourceKind::DexScreener,
        holdings: vec![
            TokenHolding::address(
                "URANUS",
                Some("BFgdzMkTPdKKJeTipv2njtDEwhKxkgFueJQfJGt1jups"),
                4320.0,
                "solana",
                "uranus.webp",
            ),
            TokenHolding::address(
                "TROLL",
                Some("5UUH9RTDiSpq6HKS6bp4NdU9PNJpXRXuiw6ShBTBhgH2"),
                10700.0,
                "solana",
                "troll.webp",
            ),
            TokenHolding::address(
                "TOKABU",
                Some("H8xQ6poBjB9DTPMDTKWzWPrnxu4bDEhybxiouF8Ppump"),
                32509.0,
                "solana",
                "tokabu.webp",
            ),
            TokenHolding::address(
                "GOD",
                Some("0x3D72DDD35cadb4e5B22CDB20b36f98077BE84284"),
                258070.0,
                "abstract",
                "GOD.avif",
            ),
            TokenHolding::address(
                "DOCKERZXBT",
                Some("0x56f8AD6112C2DB9F9848243531B277cE1C3BE30c"),
                475000.0,
                "base",
                "Docker.webp",
            ),
        ],
        total_value: 0.0,
        total_value_24h_ago: 0.0,
        initial_value: INITIAL_VALUE,
    }
}

pub fn default_portfolios() -> Portfolios {
    Portfolios {
        easy: easy_portfolio(),
        clemente: clemente_portfolio(),
    }
}
