pub const SELECT_WITH_WHERE: &str = "SELECT * FROM users WHERE id = 1";

pub const QUOTED_JOIN: &str =
    "SELECT * FROM `mydb`.`orders` o JOIN customers c ON o.cid = c.id";

pub const UPDATE: &str = "UPDATE accounts SET balance = 0";

pub const INSERT_WITH_LITERAL: &str = "INSERT INTO logs (msg) VALUES ('from the grave')";

pub const MULTILINE_REPORT: &str = "
SELECT o.id, c.name
  FROM `shop`.`orders` o
  JOIN customers c
    ON c.id = o.customer_id
 WHERE o.id IN (
       SELECT order_id
         FROM shop.orders_archive
       )
   AND EXISTS (SELECT 1 FROM `customers` x)
";
