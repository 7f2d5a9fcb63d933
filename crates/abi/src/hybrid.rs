// src/hybrid.rs
use alloy::sol;

sol! {
    /// Batch Dutch auction over a bundle of domain NFTs.
    ///
    /// `priceDecrement` is charged per block and `duration` is counted in
    /// blocks; `startedAt` / `endedAt` are unix timestamps.
    #[sol(rpc)]
    interface IHybridDutchAuction {
        function auctionCounter() external view returns (uint256);

        function auctions(uint256 auctionId) external view returns (
            address seller,
            uint256 startPrice,
            uint256 reservePrice,
            uint256 priceDecrement,
            uint256 startBlock,
            uint256 duration,
            uint256 startedAt,
            uint256 endedAt,
            bool active,
            bool cleared,
            uint256 rewardBudgetBps,
            uint256 royaltyIncrement,
            address paymentToken,
            uint256 totalConverted
        );

        function getCurrentPrice(uint256 auctionId) external view returns (uint256);
        function getCurrentRoyalty(uint256 auctionId) external view returns (uint256);
        function getAuctionTokenIds(uint256 auctionId) external view returns (uint256[] memory);
        function getAuctionFilled(uint256 auctionId) external view returns (uint256 filled);

        function createBatchAuction(
            uint256[] calldata tokenIds,
            uint256 startPrice,
            uint256 reservePrice,
            uint256 priceDecrement,
            uint256 duration,
            uint256 rewardBudgetBps,
            uint256 royaltyIncrement,
            address paymentToken
        ) external returns (uint256);

        function placeSoftBid(uint256 auctionId, uint256 threshold, uint256 desiredCount) external payable;
        function placeHardBid(uint256 auctionId, uint256 desiredCount) external payable;
    }
}
