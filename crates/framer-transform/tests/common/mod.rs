#![allow(dead_code)]

use framer_ingest::parse_csv_table;
use framer_model::{CUSTOMERS_TABLE, Schema};
use framer_transform::{TableFrame, build_raw_frame};

pub const CUSTOMERS_HEADER: &str = "Customer Number,Name,Category,Address,City,State,Zip,\
Telephone,Credit,Comment,Tax Exempt,Source,Date,Last Update,Last Order,Email,Deceased";

pub const ORDERS_HEADER: &str = "OrderNo,OrderDate,DueDate,SalesCatgy,CustomerNo,Qty,TotalSale,\
Status,Location,SalesPers,Delivery,Artist,Comments,FrameMfg,SalesType,DateCompleted,FrameNo,\
Discount,Cust-Client,Joining,Frame Width,Frame Height,Mat,MatMfg,MatColor,MattingSize,Glazing,\
ProductionComments,BinNo,Matting,Fitting";

pub fn customer_row(number: &str, name: &str, credit: &str, tax_exempt: &str) -> String {
    format!(
        "{number},{name},Retail,1 Main St,Boston,MA,02110,555-1212,{credit},\"likes\r\ngold\",\
{tax_exempt},wlk in.,01/02/14 00:00:00,,,{number}@example.com,0"
    )
}

pub fn order_row(order: &str, date: &str, customer: &str, location: &str, delivery: &str) -> String {
    format!(
        "{order},{date},,FR,{customer},1,120.00,A,{location},,{delivery},,Print,NIELSEN,WPF,,\
117,,,Nailed,24 1/2,18,Float,Rising,White,3,Reg Glass,,B7,,"
    )
}

pub fn customers(schema: &Schema, rows: &[String]) -> TableFrame {
    let text = format!("{CUSTOMERS_HEADER}\n{}\n", rows.join("\n"));
    let table = parse_csv_table(CUSTOMERS_TABLE, text.as_bytes()).expect("customers csv");
    build_raw_frame(&schema.customers, &[table]).expect("customers frame")
}

pub fn orders(schema: &Schema, tables: &[(&str, Vec<String>)]) -> TableFrame {
    let tables: Vec<_> = tables
        .iter()
        .map(|(name, rows)| {
            let text = format!("{ORDERS_HEADER}\n{}\n", rows.join("\n"));
            parse_csv_table(name, text.as_bytes()).expect("orders csv")
        })
        .collect();
    build_raw_frame(&schema.orders, &tables).expect("orders frame")
}
