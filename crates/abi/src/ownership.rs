use alloy::sol;

sol! {
    /// ERC-721 token that represents ownership of a domain.
    #[sol(rpc)]
    interface IOwnershipToken {
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function isApprovedForAll(address owner, address operator) external view returns (bool);
        function getApproved(uint256 tokenId) external view returns (address);
        function setApprovalForAll(address operator, bool approved) external;
        function approve(address to, uint256 tokenId) external;
        function tokenURI(uint256 tokenId) external view returns (string memory);
    }
}
