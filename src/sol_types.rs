//! Solidity types for contract interaction

use std::fmt;

alloy::sol! {
    #[sol(rpc)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    #[sol(rpc)]
    interface IStakingPool {
        event Staked(address indexed user, uint256 amount);
        event Withdrawn(address indexed user, uint256 amount);
        event RewardPaid(address indexed user, uint256 reward);

        function stakingToken() external view returns (address);
        function rewardsToken() external view returns (address);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function earned(address account) external view returns (uint256);
        function stake(uint256 amount) external;
        function withdraw(uint256 amount) external;
        function getReward() external;
    }

    #[sol(rpc)]
    interface IUniswapV2Factory {
        event PairCreated(address indexed token0, address indexed token1, address pair, uint256 allPairsLength);

        function getPair(address tokenA, address tokenB) external view returns (address pair);
        function createPair(address tokenA, address tokenB) external returns (address pair);
    }

    #[sol(rpc)]
    interface IUniswapV2Router02 {
        function factory() external view returns (address);
        function addLiquidity(
            address tokenA,
            address tokenB,
            uint256 amountADesired,
            uint256 amountBDesired,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB, uint256 liquidity);
    }

    #[sol(rpc)]
    interface IUniswapV2Pair {
        event Mint(address indexed sender, uint256 amount0, uint256 amount1);
        event Sync(uint112 reserve0, uint112 reserve1);

        function token0() external view returns (address);
        function token1() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
}

impl fmt::Display for IERC20::Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transfer {} -> {} value={}", self.from, self.to, self.value)
    }
}

impl fmt::Display for IERC20::Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Approval owner={} spender={} value={}",
            self.owner, self.spender, self.value
        )
    }
}

impl fmt::Display for IStakingPool::Staked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Staked user={} amount={}", self.user, self.amount)
    }
}

impl fmt::Display for IStakingPool::Withdrawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdrawn user={} amount={}", self.user, self.amount)
    }
}

impl fmt::Display for IStakingPool::RewardPaid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RewardPaid user={} reward={}", self.user, self.reward)
    }
}

impl fmt::Display for IUniswapV2Factory::PairCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PairCreated {}/{} pair={} (#{})",
            self.token0, self.token1, self.pair, self.allPairsLength
        )
    }
}

impl fmt::Display for IUniswapV2Pair::Mint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mint sender={} amount0={} amount1={}",
            self.sender, self.amount0, self.amount1
        )
    }
}

impl fmt::Display for IUniswapV2Pair::Sync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sync reserve0={} reserve1={}", self.reserve0, self.reserve1)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Address, U256, address},
        sol_types::SolEvent,
    };

    use super::*;

    #[test]
    fn transfer_signature_matches_erc20() {
        assert_eq!(
            IERC20::Transfer::SIGNATURE,
            "Transfer(address,address,uint256)"
        );
        assert_eq!(
            IERC20::Transfer::SIGNATURE_HASH,
            crate::fixtures::TRANSFER_TOPIC
        );
    }

    #[test]
    fn events_render_on_one_line() {
        let transfer = IERC20::Transfer {
            from: Address::ZERO,
            to: address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            value: U256::from(5),
        };
        let line = transfer.to_string();
        assert!(line.starts_with("Transfer 0x0000000000000000000000000000000000000000 -> "));
        assert!(line.ends_with("value=5"));
        assert!(!line.contains('\n'));
    }
}
