use alloy::sol;

sol! {
#[sol(rpc)]
interface IFakeNFTMarketplace {
    function getPrice() external view returns (uint256);

    function available(uint256 _tokenId) external view returns (bool);
}

#[sol(rpc)]
interface ICryptoDevsDAO {
    function numProposals() external view returns (uint256);

    function createProposal(uint256 _nftTokenId) external returns (uint256);
}
}
