// src/premium.rs
use alloy::sol;

sol! {
    /// Single-domain premium auction with 4-tier commit-reveal betting.
    ///
    /// `startTime` is a unix timestamp, `duration` is in seconds and
    /// `priceDecrement` is charged per minute.
    #[sol(rpc)]
    interface IPremiumAuctionBetting {
        function auctionCounter() external view returns (uint256);

        function auctions(uint256 auctionId) external view returns (
            address seller,
            uint256 tokenId,
            uint256 startPrice,
            uint256 reservePrice,
            uint256 priceDecrement,
            uint256 startTime,
            uint256 duration,
            uint256 highPrice,
            uint256 lowPrice,
            bool cleared,
            address winner,
            uint256 finalPrice
        );

        function bettingPools(uint256 auctionId) external view returns (
            uint256 commitDeadline,
            uint256 revealDeadline,
            uint256 totalPool,
            bool settled
        );

        function getCurrentPrice(uint256 auctionId) external view returns (uint256);

        function createAuctionBetting(
            uint256 tokenId,
            uint256 startPrice,
            uint256 reservePrice,
            uint256 priceDecrement,
            uint256 duration,
            uint256 highPrice,
            uint256 lowPrice
        ) external returns (uint256);

        function placeBid(uint256 auctionId) external payable;
        function commitBet(uint256 auctionId, bytes32 commitHash, uint256 amount) external;
        function revealBet(uint256 auctionId, uint8 choice, uint256 amount, uint256 secret) external;
        function settleBetting(uint256 auctionId) external;
    }
}
