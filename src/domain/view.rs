//! 当前视图（首页 / 生成钱包 / 生成地址，三者互斥）

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Home,
    GenerateWallets,
    GenerateAddresses,
}

impl ActiveView {
    pub fn go_home(&mut self) {
        *self = ActiveView::Home;
    }

    pub fn open_wallets(&mut self) {
        *self = ActiveView::GenerateWallets;
    }

    pub fn open_addresses(&mut self) {
        *self = ActiveView::GenerateAddresses;
    }

    /// 首页 “Get Started” 按钮
    pub fn get_started(&mut self) {
        if *self == ActiveView::Home {
            self.open_wallets();
        }
    }
}
